use crate::config::AppConfig;
use crate::errors::ServiceError;
use futures::future::BoxFuture;
use migrations::Migrator;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, DbBackend,
    Statement, TransactionError, TransactionTrait,
};
use sea_orm_migration::{MigratorTrait, SchemaManager};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// Configuration for database connection
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Idle timeout duration
    pub idle_timeout: Duration,
    /// Acquire connection timeout
    pub acquire_timeout: Duration,
    /// Log statements through sqlx
    pub sqlx_logging: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            acquire_timeout: Duration::from_secs(10),
            sqlx_logging: false,
        }
    }
}

impl From<&AppConfig> for DbConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            url: cfg.database_url.clone(),
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections,
            connect_timeout: Duration::from_secs(cfg.db_connect_timeout_secs),
            idle_timeout: Duration::from_secs(cfg.db_idle_timeout_secs),
            acquire_timeout: Duration::from_secs(cfg.db_acquire_timeout_secs),
            sqlx_logging: cfg.sqlx_logging,
        }
    }
}

/// Establishes a connection pool to the database
///
/// # Errors
/// Returns a `ServiceError` if the connection cannot be established
pub async fn establish_connection(database_url: &str) -> Result<DbPool, ServiceError> {
    let config = DbConfig {
        url: database_url.to_string(),
        ..Default::default()
    };

    establish_connection_with_config(&config).await
}

/// Establishes a connection pool to the database with custom configuration
///
/// SQLite connections opened through sqlx enforce foreign keys, which the
/// seed relies on to reject dangling references at insert time.
pub async fn establish_connection_with_config(config: &DbConfig) -> Result<DbPool, ServiceError> {
    debug!("Configuring database connection with: {:?}", config);

    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(config.sqlx_logging);

    info!(
        "Connecting to database with max_connections={}",
        config.max_connections
    );

    let db_pool = Database::connect(opt).await.map_err(|e| {
        error!("Database connection failed: {}", e);
        ServiceError::DatabaseError(e)
    })?;

    info!("Database connection pool established successfully");
    Ok(db_pool)
}

/// Establish DB pool using AppConfig tuning
pub async fn establish_connection_from_app_config(cfg: &AppConfig) -> Result<DbPool, ServiceError> {
    let db_cfg: DbConfig = cfg.into();
    establish_connection_with_config(&db_cfg).await
}

/// Creates every table that is not present yet.
///
/// Applied migrations are tracked, so running this against a store that
/// already holds the schema is a no-op and leaves existing rows alone.
pub async fn create_schema(pool: &DbPool) -> Result<(), ServiceError> {
    info!("Creating database schema");
    let start = Instant::now();

    let result = Migrator::up(pool, None)
        .await
        .map_err(|e| ServiceError::MigrationError(e.to_string()));

    let elapsed = start.elapsed();
    match &result {
        Ok(_) => info!("Database schema ready in {:?}", elapsed),
        Err(e) => error!("Schema creation failed after {:?}: {}", elapsed, e),
    }

    result
}

/// Drops every table and recreates the schema from scratch.
pub async fn reset_schema(pool: &DbPool) -> Result<(), ServiceError> {
    warn!("Dropping all tables and recreating the schema");
    let start = Instant::now();

    let result = Migrator::fresh(pool)
        .await
        .map_err(|e| ServiceError::MigrationError(e.to_string()));

    match &result {
        Ok(_) => info!("Schema recreated in {:?}", start.elapsed()),
        Err(e) => error!("Schema reset failed: {}", e),
    }

    result
}

/// Tables of the schema that are absent from the store, in creation order.
pub async fn missing_tables(pool: &DbPool) -> Result<Vec<&'static str>, ServiceError> {
    let manager = SchemaManager::new(pool);
    let mut missing = Vec::new();

    for table in migrations::TABLES {
        if !manager.has_table(table).await? {
            missing.push(table);
        }
    }

    Ok(missing)
}

/// Runs `f` inside a transaction.
///
/// The transaction commits when `f` returns `Ok` and rolls back on every
/// error path, including a failed commit.
pub async fn with_transaction<C, F, T>(db: &C, f: F) -> Result<T, ServiceError>
where
    C: TransactionTrait,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<T, ServiceError>> + Send,
    T: Send,
{
    let start = Instant::now();
    debug!("Starting database transaction");

    match db.transaction(f).await {
        Ok(value) => {
            debug!("Transaction committed in {:?}", start.elapsed());
            Ok(value)
        }
        Err(TransactionError::Connection(e)) => {
            error!("Transaction failed to start or commit: {}", e);
            Err(ServiceError::from(e))
        }
        Err(TransactionError::Transaction(e)) => {
            warn!("Transaction rolled back after {:?}: {}", start.elapsed(), e);
            Err(e)
        }
    }
}

/// Moves PostgreSQL identity sequences past explicitly inserted ids.
///
/// Other backends derive the next id from the table contents.
pub async fn sync_identity_sequences<C>(db: &C) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    if backend != DbBackend::Postgres {
        return Ok(());
    }

    for table in migrations::TABLES {
        let sql = format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
             COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
        );
        db.execute(Statement::from_string(backend, sql)).await?;
    }

    debug!("Identity sequences synchronised");
    Ok(())
}
