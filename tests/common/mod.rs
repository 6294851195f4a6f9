#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ConnectionTrait, DatabaseBackend as DbBackend, Statement};
use tempfile::TempDir;

use commerce_schema::{
    config::AppConfig,
    db::{self, DbPool},
    seed, Dataset, TableCounts,
};

/// Helper harness backed by a SQLite file in a fresh temporary directory.
pub struct TestDb {
    pub pool: DbPool,
    pub url: String,
    _dir: TempDir,
}

impl TestDb {
    /// Connects to an empty store without creating any table.
    pub async fn empty() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("commerce_test.sqlite");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let mut cfg = AppConfig::new(url.clone(), "test".to_string());
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");

        Self {
            pool,
            url,
            _dir: dir,
        }
    }

    /// Connects and creates the schema.
    pub async fn new() -> Self {
        let test_db = Self::empty().await;
        db::create_schema(&test_db.pool)
            .await
            .expect("failed to create schema in tests");
        test_db
    }

    /// Connects, creates the schema and seeds the sample dataset.
    pub async fn seeded() -> Self {
        let test_db = Self::new().await;
        seed(&test_db.pool, &sample())
            .await
            .expect("failed to seed sample data");
        test_db
    }

    pub async fn counts(&self) -> TableCounts {
        commerce_schema::queries::table_counts(&self.pool)
            .await
            .expect("count rows")
    }

    /// Turns foreign key enforcement off for this connection.
    pub async fn disable_foreign_keys(&self) {
        self.pool
            .execute(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA foreign_keys = OFF;".to_string(),
            ))
            .await
            .expect("disable foreign keys");
    }
}

/// Fixed instant the sample timestamps are anchored at.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 15, 15, 46, 55).unwrap()
}

pub fn sample() -> Dataset {
    Dataset::sample(reference_time())
}
