use sea_orm::error::DbErr;
use sea_orm::SqlErr;
use serde::Serialize;

/// Errors surfaced by schema creation, seeding and the read helpers.
#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(
        #[serde(skip)]
        DbErr,
    ),

    /// A foreign key pointed at a parent row that does not exist.
    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    /// A unique or primary key constraint rejected the row.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        ServiceError::db_error(err)
    }
}

// Driver messages used when the backend error code is not recognised.
const SQLITE_FOREIGN_KEY_MESSAGE: &str = "FOREIGN KEY constraint failed";
const SQLITE_UNIQUE_MESSAGE: &str = "UNIQUE constraint failed";

impl ServiceError {
    /// Classifies a database error into the constraint taxonomy.
    ///
    /// Foreign key failures become [`ServiceError::ReferentialIntegrity`],
    /// unique and primary key failures become [`ServiceError::Conflict`],
    /// everything else stays a [`ServiceError::DatabaseError`].
    pub fn db_error(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return ServiceError::ReferentialIntegrity(msg)
            }
            Some(SqlErr::UniqueConstraintViolation(msg)) => return ServiceError::Conflict(msg),
            _ => {}
        }

        let message = err.to_string();
        if message.contains(SQLITE_FOREIGN_KEY_MESSAGE) {
            ServiceError::ReferentialIntegrity(message)
        } else if message.contains(SQLITE_UNIQUE_MESSAGE) {
            ServiceError::Conflict(message)
        } else {
            ServiceError::DatabaseError(err)
        }
    }

    /// True for failures caused by a constraint rejecting a row.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::ReferentialIntegrity(_) | Self::Conflict(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn plain_database_errors_are_not_reclassified() {
        let err = ServiceError::db_error(DbErr::Custom("connection refused".to_string()));
        assert_matches!(err, ServiceError::DatabaseError(DbErr::Custom(_)));
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn sqlite_foreign_key_message_maps_to_referential_integrity() {
        let err = ServiceError::from(DbErr::Custom(
            "error returned from database: (code: 787) FOREIGN KEY constraint failed".to_string(),
        ));
        assert_matches!(err, ServiceError::ReferentialIntegrity(_));
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn sqlite_unique_message_maps_to_conflict() {
        let err = ServiceError::from(DbErr::Custom(
            "UNIQUE constraint failed: customers.id".to_string(),
        ));
        assert_matches!(err, ServiceError::Conflict(msg) if msg.contains("customers.id"));
    }

    #[test]
    fn validation_errors_convert() {
        let err = ServiceError::from(validator::ValidationErrors::new());
        assert_matches!(err, ServiceError::ValidationError(_));
    }
}
