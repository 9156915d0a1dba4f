//! Management-command entry point for `FleetDesk`.
//!
//! Subcommands are invoked by an external scheduler (cron or similar); each
//! run performs one batch operation and exits. Per-contract problems are
//! logged and skipped inside the batch; only a batch-level failure (e.g. the
//! database being unreachable) produces a non-zero exit.

use chrono::Utc;
use dotenvy::dotenv;
use fleetdesk::{
    config::database,
    core::{billing, invoice},
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "expected one of: generate-invoices, mark-overdue, init-db";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    let command = env::args().nth(1).ok_or_else(|| Error::Config {
        message: format!("missing command; {USAGE}"),
    })?;

    // 3. Connect and make sure the schema exists
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db).await?;

    // 4. Dispatch the requested batch operation
    match command.as_str() {
        "generate-invoices" => {
            let today = Utc::now().date_naive();
            let result = billing::generate_due_invoices(&db, today).await?;
            info!("{}", billing::format_generation_summary(&result));
            println!("Generated invoices: {}", result.created_count);
        }
        "mark-overdue" => {
            let today = Utc::now().date_naive();
            let marked = invoice::mark_overdue_invoices(&db, today).await?;
            println!("Invoices marked overdue: {marked}");
        }
        "init-db" => {
            // Schema creation already ran above; nothing else to do
            println!("Database schema is up to date.");
        }
        other => {
            error!("Unknown command: {other}");
            return Err(Error::Config {
                message: format!("unknown command `{other}`; {USAGE}"),
            });
        }
    }

    Ok(())
}
