//! Tracing setup. `RUST_LOG` picks the filter, `warn` when unset.
//!
//! The interactive console owns the terminal, so it logs to `LOG_PATH` instead of stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_PATH: &str = "exports/sokoban.log";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn init_stderr() {
    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

pub fn init_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_out = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_writer(Mutex::new(log_out)).with_ansi(false))
        .init();
    Ok(())
}
