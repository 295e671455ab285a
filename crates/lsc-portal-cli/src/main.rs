//! LSC Portal CLI - command-line access to the Learning Support Centre
//! administration portal.
//!
//! Signs in with an LSC code, keeps the session between runs, and prints
//! centre, student and report data as JSON.

mod commands;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lsc_portal_core::{ApiClient, Config, SessionEvent};

/// Rolling log file name prefix inside the cache directory
const LOG_FILE_PREFIX: &str = "lscportal.log";

#[derive(Parser)]
#[command(name = "lscportal", version, about = "Learning Support Centre admin portal client")]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8000/api
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in with an LSC code (password is prompted)
    Login { lsc_number: Option<String> },
    /// End the current session
    Logout,
    /// Change the signed-in centre's password
    ChangePassword,
    /// Show whether a session is active
    Status,
    /// List LSC centres
    Centers {
        #[arg(long)]
        search: Option<String>,
    },
    /// Create an LSC centre (password is prompted)
    CreateCenter {
        lsc_number: String,
        lsc_name: String,
        email: String,
        #[arg(long, default_value = "")]
        mobile: String,
        #[arg(long, default_value = "")]
        address: String,
    },
    /// Delete an LSC centre by code
    DeleteCenter { lsc_number: String },
    /// List student admissions
    Students {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        program: Option<i64>,
    },
    /// List attendance records
    Attendance,
    /// List assignment marks
    Marks {
        #[arg(long)]
        program: Option<i64>,
    },
    /// List counsellors
    Counsellors,
    /// List programmes
    Programs,
    /// Print one of the backend reports
    Report { kind: ReportKind },
    /// Summary plus application, unpaid and confirmed reports
    Dashboard,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportKind {
    Summary,
    Applications,
    Unpaid,
    Confirmed,
}

/// Initialize the tracing subscriber for logging.
/// Use RUST_LOG to control the level (e.g., RUST_LOG=debug).
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    let log_dir = if config.log_to_file {
        Some(config.cache_dir()?)
    } else {
        None
    };
    let _guard = init_tracing(log_dir.as_deref());

    let base_url = cli.api_url.clone().unwrap_or_else(|| config.api_base_url());
    info!(base_url = %base_url, "LSC portal client starting");

    let client = ApiClient::new(base_url, config.session_store()?)?;
    let mut events = client.subscribe();

    let result = commands::run(&client, &mut config, cli.command).await;

    while let Ok(event) = events.try_recv() {
        if let SessionEvent::Expired { redirect_to } = event {
            eprintln!(
                "Session expired. Sign in again with `lscportal login` (login entry point: {}).",
                redirect_to
            );
        }
    }

    result
}
