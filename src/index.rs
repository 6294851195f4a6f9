//! Parent-id to children lookup built from rows that carry a foreign key.
//!
//! Entities only hold the key of their parent; the reverse direction is
//! derived on demand instead of stored as back-pointers.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ChildIndex<T> {
    children: HashMap<i32, Vec<T>>,
}

impl<T> ChildIndex<T> {
    /// Groups `rows` by the parent id returned from `parent_key`, keeping
    /// the input order within each group.
    pub fn build<I, F>(rows: I, parent_key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> i32,
    {
        let mut children: HashMap<i32, Vec<T>> = HashMap::new();
        for row in rows {
            children.entry(parent_key(&row)).or_default().push(row);
        }
        Self { children }
    }

    /// Removes and returns the children of `parent_id`.
    pub fn take(&mut self, parent_id: i32) -> Vec<T> {
        self.children.remove(&parent_id).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Line {
        id: i32,
        order_id: i32,
    }

    fn lines() -> Vec<Line> {
        vec![
            Line { id: 1, order_id: 1 },
            Line { id: 2, order_id: 1 },
            Line { id: 3, order_id: 2 },
        ]
    }

    #[test]
    fn groups_children_by_parent_in_input_order() {
        let mut index = ChildIndex::build(lines(), |l| l.order_id);
        let ids: Vec<i32> = index.take(1).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(index.take(2).len(), 1);
    }

    #[test]
    fn unknown_parent_has_no_children() {
        let mut index = ChildIndex::build(lines(), |l| l.order_id);
        assert!(index.take(9).is_empty());
    }

    #[test]
    fn take_moves_children_out() {
        let mut index = ChildIndex::build(lines(), |l| l.order_id);
        assert_eq!(index.take(2), vec![Line { id: 3, order_id: 2 }]);
        assert!(index.take(2).is_empty());
        assert_eq!(index.take(1).len(), 2);
    }
}
