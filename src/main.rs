use anyhow::Context;
use clap::Parser;
use std::{io, path::PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use projects::{InputReader, MenuController, ProjectDb};

#[derive(Parser)]
#[command(name = "projects")]
#[command(about = "Manage DIY project records from an interactive menu")]
struct Cli {
    /// Path to the SQLite database file (created if missing)
    #[arg(long, value_name = "PATH", env = "PROJECTS_DATABASE", default_value = "projects.db")]
    database: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Logs go to stderr so they never mix with the menu on stdout.
fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(&args);

    let db = ProjectDb::open(&args.database)
        .await
        .with_context(|| format!("Failed to open project database {:?}", args.database))?;

    let input = InputReader::new(io::stdin().lock(), io::stdout());
    let mut menu = MenuController::new(db.clone(), input);
    let result = menu.run().await;
    db.close().await;

    result.context("Session ended unexpectedly")?;
    Ok(())
}
