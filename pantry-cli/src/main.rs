//! Pantry - an in-memory item catalog with a JSON request interface.
//!
//! Main entry point. Requests come in on stdin, responses go out on
//! stdout, logs go to stderr.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pantry_core::api::session;
use pantry_core::catalog::{seed, Catalog};

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "pantry",
    about = "In-memory item catalog over newline-delimited JSON",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,
}

#[derive(Parser, Debug)]
enum Command {
    /// Serve requests from stdin until EOF
    Serve {
        /// JSON array of item submissions loaded before serving
        #[clap(long)]
        seed: Option<PathBuf>,
    },

    /// Evaluate a single request from stdin
    Eval {
        /// JSON array of item submissions loaded before evaluating
        #[clap(long)]
        seed: Option<PathBuf>,
    },
}

/// Initialize tracing with CLI flags
///
/// Logs MUST go to stderr; stdout carries only response lines.
fn initialize_tracing(log_level: &LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    match cli.command {
        Command::Serve { seed } => serve_command(seed.as_deref()),
        Command::Eval { seed } => eval_command(seed.as_deref()),
    }
}

/// Build the catalog for this process, applying the seed file if given.
///
/// A bad seed file is a startup failure, not a 4xx response.
fn build_catalog(seed_path: Option<&Path>) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    if let Some(path) = seed_path {
        let loaded = seed::load_into(&mut catalog, path)?;
        debug!(loaded, "catalog seeded");
    }
    Ok(catalog)
}

fn serve_command(seed_path: Option<&Path>) -> Result<()> {
    let mut catalog = build_catalog(seed_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let served = session::run(&mut catalog, stdin.lock(), stdout.lock())?;

    debug!(served, "serve finished");
    Ok(())
}

fn eval_command(seed_path: Option<&Path>) -> Result<()> {
    let mut catalog = build_catalog(seed_path)?;

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read request from stdin")?;

    let response = session::evaluate(&mut catalog, &buffer);
    let encoded = serde_json::to_string(&response).context("failed to encode response")?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{encoded}")?;
    Ok(())
}
