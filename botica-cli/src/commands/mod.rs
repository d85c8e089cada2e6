//! CLI command implementations

pub mod clear;
pub mod dates;
pub mod demo;
pub mod families;
pub mod ingest;
pub mod logs;
pub mod report;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use botica_core::services::{EntryPoint, LogEvent, LoggingService};
use botica_core::BoticaContext;

/// Get the botica data directory from environment or default
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BOTICA_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".botica")
    }
}

/// Get or create botica context
pub fn get_context() -> Result<BoticaContext> {
    let data_dir = get_data_dir();

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    BoticaContext::new(&data_dir).context("Failed to initialize botica context")
}

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;
    Some(LoggingService::new(
        &data_dir,
        EntryPoint::Cli,
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}
