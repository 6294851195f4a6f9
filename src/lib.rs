//! Commerce schema library
//!
//! Defines the twelve-table commerce schema (customers, products, suppliers,
//! categories, orders and their children), creates it in a relational store
//! and seeds it with a fixed sample dataset in one transaction.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod index;
pub mod integrity;
pub mod queries;
pub mod seed;

pub use config::{load_config, AppConfig};
pub use errors::ServiceError;
pub use integrity::{find_dangling_references, DanglingReference};
pub use seed::{seed, Dataset, TableCounts};

/// Table names in creation order; every table follows the tables it
/// references.
pub use migrations::TABLES;
