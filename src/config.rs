use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError, ValidationErrors};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_DATABASE_URL: &str = "sqlite://create_db_models.sqlite?mode=rwc";
const CONFIG_DIR: &str = "config";

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Database connection URL
    #[validate(length(min = 1, message = "database_url must not be empty"))]
    pub database_url: String,

    /// Application environment
    #[validate(length(min = 1))]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Drop and recreate every table before seeding
    #[serde(default)]
    pub reset_schema: bool,

    /// DB pool: max connections
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,

    /// DB pool: min connections
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    /// DB timeouts (seconds)
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,
    #[serde(default = "default_db_idle_timeout_secs")]
    pub db_idle_timeout_secs: u64,
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,

    /// Log every SQL statement through sqlx
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl AppConfig {
    pub fn new(database_url: String, environment: String) -> Self {
        Self {
            database_url,
            environment,
            log_level: default_log_level(),
            log_json: false,
            reset_schema: false,
            db_max_connections: default_db_max_connections(),
            db_min_connections: default_db_min_connections(),
            db_connect_timeout_secs: default_db_connect_timeout_secs(),
            db_idle_timeout_secs: default_db_idle_timeout_secs(),
            db_acquire_timeout_secs: default_db_acquire_timeout_secs(),
            sqlx_logging: false,
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEFAULT_ENV
    }

    pub fn is_sqlite(&self) -> bool {
        self.database_url.starts_with("sqlite:")
    }

    fn validate_additional_constraints(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.db_max_connections == 0 {
            let mut err = ValidationError::new("db_max_connections");
            err.message = Some("db_max_connections must be at least 1".into());
            errors.add("db_max_connections", err);
        }

        if self.db_min_connections > self.db_max_connections {
            let mut err = ValidationError::new("db_min_connections");
            err.message = Some("db_min_connections cannot exceed db_max_connections".into());
            errors.add("db_min_connections", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Runs derive-based and cross-field validation.
    pub fn validate_all(&self) -> Result<(), AppConfigError> {
        self.validate().map_err(|e| {
            error!("Configuration validation failed: {:?}", e);
            AppConfigError::Validation(e)
        })?;

        self.validate_additional_constraints().map_err(|e| {
            error!("Configuration validation failed: {:?}", e);
            AppConfigError::Validation(e)
        })
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Default value functions
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

// A single connection keeps the seed on one session; SQLite files do not
// benefit from more.
fn default_db_max_connections() -> u32 {
    1
}
fn default_db_min_connections() -> u32 {
    1
}
fn default_db_connect_timeout_secs() -> u64 {
    10
}
fn default_db_idle_timeout_secs() -> u64 {
    300
}
fn default_db_acquire_timeout_secs() -> u64 {
    10
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => {
            let mut err = ValidationError::new("invalid_log_level");
            err.message = Some(format!("unsupported log level '{}'", level).into());
            Err(err)
        }
    }
}

/// Initializes tracing using the provided log level as the default filter
///
/// Log lines go to stderr; stdout is left to program output.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!(
        "commerce_schema={level},seed_data={level},sea_orm_migration={level},sqlx=warn"
    );
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .with_writer(std::io::stderr)
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Loads application configuration from the `config` directory of the
/// working directory.
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    load_config_from(Path::new(CONFIG_DIR))
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (`{dir}/default.toml`)
/// 3. Environment-specific config (`{dir}/{env}.toml`)
/// 4. Environment variables (`APP__*`)
pub fn load_config_from(dir: &Path) -> Result<AppConfig, AppConfigError> {
    // Support both RUN_ENV and APP_ENV for selecting config profile
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            dir.display()
        );
    }

    let config = Config::builder()
        .set_default("database_url", DEFAULT_DATABASE_URL)?
        .set_default("environment", run_env.as_str())?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
        .add_source(File::with_name(&dir.join(&run_env).to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate_all()?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn base_config() -> AppConfig {
        AppConfig::new("sqlite://seed.db?mode=rwc".into(), "test".into())
    }

    #[test]
    fn base_config_is_valid() {
        assert!(base_config().validate_all().is_ok());
    }

    #[test]
    fn rejects_empty_database_url() {
        let mut cfg = base_config();
        cfg.database_url = String::new();
        let err = cfg.validate_all().unwrap_err();
        match err {
            AppConfigError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("database_url"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut cfg = base_config();
        cfg.log_level = "loud".into();
        assert!(matches!(
            cfg.validate_all(),
            Err(AppConfigError::Validation(_))
        ));
    }

    #[test]
    fn rejects_min_connections_above_max() {
        let mut cfg = base_config();
        cfg.db_min_connections = 4;
        cfg.db_max_connections = 2;
        assert!(cfg.validate_all().is_err());
    }

    #[test]
    fn detects_sqlite_urls() {
        assert!(base_config().is_sqlite());
        let cfg = AppConfig::new("postgres://localhost/shop".into(), "test".into());
        assert!(!cfg.is_sqlite());
    }

    #[test]
    fn loads_values_from_default_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "database_url = \"sqlite://from_file.db?mode=rwc\"\nreset_schema = true\n",
        )
        .unwrap();

        let cfg = load_config_from(dir.path()).unwrap();
        assert_eq!(cfg.database_url, "sqlite://from_file.db?mode=rwc");
        assert!(cfg.reset_schema);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn missing_directory_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config_from(&dir.path().join("absent")).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert!(!cfg.reset_schema);
        assert_eq!(cfg.db_max_connections, 1);
    }
}
