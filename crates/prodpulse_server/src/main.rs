//! prodpulse server entry point.
//!
//! Parses flags, initializes logging and the database, then serves the
//! product health API until the process is stopped.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;
use prodpulse_core::db::open_db;
use prodpulse_core::{default_log_level, init_logging};
use prodpulse_server::routes::app_router;
use prodpulse_server::state::AppState;
use tokio::net::TcpListener;

#[derive(Debug, Parser)]
#[command(name = "prodpulse-server", about = "Product health REST service")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// SQLite database file.
    #[arg(long, default_value = "prodpulse.sqlite3")]
    db: PathBuf,

    /// Absolute directory for rolling log files. Logging is disabled
    /// when unset.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[tokio::main]
async fn run() -> Result<(), String> {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        let default_level = default_log_level();
        let level = args.log_level.as_deref().unwrap_or(default_level);
        init_logging(level, log_dir)?;
    }

    let conn = open_db(&args.db)
        .map_err(|err| format!("failed to open database `{}`: {err}", args.db.display()))?;
    let state = Arc::new(AppState::new(conn));
    let router = app_router(state);

    let listener = TcpListener::bind(args.listen)
        .await
        .map_err(|err| format!("failed to bind {}: {err}", args.listen))?;
    info!(
        "event=server_start module=http status=ok listen={} db={}",
        args.listen,
        args.db.display()
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| format!("server error: {err}"))?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("event=server_stop module=http status=ok reason=ctrl_c");
}
