//! Seed data script - creates the commerce schema and fills it with the
//! sample dataset
//!
//! Run with: cargo run --bin seed-data
//!
//! This creates:
//! - 12 tables (customers, products, suppliers, categories, orders, ...)
//! - 58 sample rows (5 customers, 5 products, 3 suppliers, 3 categories,
//!   5 orders, 7 order items, ...), inserted in one transaction

use std::io::Write;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::{error, info};

use commerce_schema::{
    config::{self, AppConfig},
    db::{self, DbPool},
    seed, Dataset, ServiceError, TableCounts,
};

const SUCCESS_MESSAGE: &str = "Database and sample data created successfully.";

#[derive(Debug, Parser)]
#[command(name = "seed-data", about = "Create the commerce schema and seed sample data")]
struct Args {
    /// Database URL, overrides the configured one
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Drop and recreate every table before seeding
    #[arg(long)]
    reset: bool,

    /// Print the inserted row counts as JSON
    #[arg(long)]
    json: bool,
}

fn apply_overrides(mut cfg: AppConfig, args: &Args) -> AppConfig {
    if let Some(url) = &args.database_url {
        cfg.database_url = url.clone();
    }
    if args.reset {
        cfg.reset_schema = true;
    }
    cfg
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = config::load_config().context("failed to load configuration")?;
    let cfg = apply_overrides(cfg, &args);
    config::init_tracing(cfg.log_level(), cfg.log_json);

    let mut stdout = std::io::stdout().lock();
    run(&cfg, &args, &mut stdout).await?;
    Ok(())
}

/// Connects, seeds and writes the report to `out`.
///
/// The connection is closed before returning, on success and on failure.
async fn run<W: Write>(cfg: &AppConfig, args: &Args, out: &mut W) -> anyhow::Result<TableCounts> {
    info!("=== Commerce Schema Seed Data ===");
    info!(environment = %cfg.environment, "Connecting to {}", cfg.database_url());
    let db = db::establish_connection_from_app_config(cfg).await?;

    let result = create_and_seed(&db, cfg).await;
    let closed = db.close().await;

    let counts = match result {
        Ok(counts) => counts,
        Err(e) if e.is_constraint_violation() => {
            error!("Seed rejected by a constraint, nothing was written: {}", e);
            return Err(e.into());
        }
        Err(e) => {
            error!("Seeding failed: {}", e);
            return Err(e.into());
        }
    };
    closed?;

    write_report(out, &counts, args.json)?;
    Ok(counts)
}

async fn create_and_seed(db: &DbPool, cfg: &AppConfig) -> Result<TableCounts, ServiceError> {
    if cfg.reset_schema {
        db::reset_schema(db).await?;
    } else {
        db::create_schema(db).await?;
    }

    let dataset = Dataset::sample(Utc::now());
    dataset.check_references()?;

    seed(db, &dataset).await
}

// With --json stdout carries only the report; the success line moves to stderr.
fn write_report<W: Write>(out: &mut W, counts: &TableCounts, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, counts)?;
        writeln!(out)?;
        eprintln!("{}", SUCCESS_MESSAGE);
    } else {
        for (table, rows) in counts.as_pairs() {
            info!("  {:<20} {} rows", table, rows);
        }
        writeln!(out, "{}", SUCCESS_MESSAGE)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use commerce_schema::queries;
    use tempfile::TempDir;

    fn setup(dir: &TempDir, flags: &[&str]) -> (AppConfig, Args) {
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("seed.sqlite").display()
        );
        let mut argv = vec!["seed-data", "--database-url", url.as_str()];
        argv.extend_from_slice(flags);

        let args = Args::parse_from(argv);
        let cfg = apply_overrides(
            AppConfig::new("sqlite::memory:".to_string(), "test".to_string()),
            &args,
        );
        (cfg, args)
    }

    async fn stored_counts(cfg: &AppConfig) -> TableCounts {
        let db = db::establish_connection(cfg.database_url())
            .await
            .expect("reconnect");
        let counts = queries::table_counts(&db).await.expect("count rows");
        db.close().await.expect("close");
        counts
    }

    #[test]
    fn flags_override_configuration() {
        let args = Args::parse_from(["seed-data", "--database-url", "sqlite::memory:", "--reset"]);
        let cfg = apply_overrides(
            AppConfig::new("sqlite://other.sqlite".to_string(), "test".to_string()),
            &args,
        );
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert!(cfg.reset_schema);
        assert!(!args.json);
    }

    #[tokio::test]
    async fn plain_run_prints_the_success_line() {
        let dir = TempDir::new().unwrap();
        let (cfg, args) = setup(&dir, &[]);

        let mut out = Vec::new();
        let counts = run(&cfg, &args, &mut out).await.expect("first run");

        assert_eq!(String::from_utf8(out).unwrap(), format!("{SUCCESS_MESSAGE}\n"));
        assert_eq!(counts.total(), 58);
    }

    #[tokio::test]
    async fn json_report_is_the_only_stdout_output() {
        let dir = TempDir::new().unwrap();
        let (cfg, args) = setup(&dir, &["--json"]);

        let mut out = Vec::new();
        run(&cfg, &args, &mut out).await.expect("seed");

        let report: TableCounts = serde_json::from_slice(&out).expect("stdout is JSON");
        assert_eq!(report, Dataset::sample(Utc::now()).counts());
        assert_eq!(report.order_items, 7);
        assert_eq!(report.suppliers, 3);
    }

    #[tokio::test]
    async fn second_run_conflicts_and_keeps_rows() {
        let dir = TempDir::new().unwrap();
        let (cfg, args) = setup(&dir, &[]);
        run(&cfg, &args, &mut Vec::new()).await.expect("first run");

        let mut out = Vec::new();
        let err = run(&cfg, &args, &mut out)
            .await
            .expect_err("second run must fail");

        assert_matches!(err.downcast_ref::<ServiceError>(), Some(ServiceError::Conflict(_)));
        assert!(out.is_empty());
        assert_eq!(stored_counts(&cfg).await.total(), 58);
    }

    #[tokio::test]
    async fn reset_run_reseeds_a_populated_store() {
        let dir = TempDir::new().unwrap();
        let (cfg, args) = setup(&dir, &[]);
        run(&cfg, &args, &mut Vec::new()).await.expect("first run");

        let (reset_cfg, reset_args) = setup(&dir, &["--reset"]);
        let counts = run(&reset_cfg, &reset_args, &mut Vec::new())
            .await
            .expect("reset run");

        assert_eq!(counts.total(), 58);
        assert_eq!(stored_counts(&reset_cfg).await, counts);
    }

    #[tokio::test]
    async fn failed_run_releases_the_store() {
        let dir = TempDir::new().unwrap();
        let (cfg, args) = setup(&dir, &[]);
        run(&cfg, &args, &mut Vec::new()).await.expect("first run");
        assert!(run(&cfg, &args, &mut Vec::new()).await.is_err());

        // The store stays usable for a later run once the failed one returns.
        let (reset_cfg, reset_args) = setup(&dir, &["--reset"]);
        assert!(run(&reset_cfg, &reset_args, &mut Vec::new()).await.is_ok());
    }
}
