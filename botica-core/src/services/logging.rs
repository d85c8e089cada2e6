//! Logging service: structured event logging to a JSONL file
//!
//! Privacy-safe activity log stored as one JSON object per line in
//! events.log. Dataset contents (sellers, products, amounts) are never
//! logged; events carry names, counts, and error messages only.
//!
//! Used by both the CLI and the desktop application.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::schema::RecordKind;

pub const LOG_FILE: &str = "events.log";

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Cli,
    Desktop,
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<RecordKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            kind: None,
            inserted: None,
            updated: None,
            error_message: None,
        }
    }

    /// Set the command context (for CLI events)
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the record kind the event applied to
    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set merge counters
    pub fn with_counts(mut self, inserted: usize, updated: usize) -> Self {
        self.inserted = Some(inserted);
        self.updated = Some(updated);
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// A log entry as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub entry_point: EntryPoint,
    pub app_version: String,
    pub platform: String,
    #[serde(flatten)]
    pub event: LogEvent,
}

/// Service for structured event logging
pub struct LoggingService {
    path: PathBuf,
    entry_point: EntryPoint,
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    /// Point the service at events.log in the data directory
    pub fn new(data_dir: &Path, entry_point: EntryPoint, app_version: impl Into<String>) -> Self {
        Self {
            path: data_dir.join(LOG_FILE),
            entry_point,
            app_version: app_version.into(),
            platform: detect_platform(),
        }
    }

    /// Append one event.
    ///
    /// Errors are returned but callers are expected to drop them; logging
    /// must never break the operation being logged.
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let entry = LogEntry {
            at: Utc::now(),
            entry_point: self.entry_point,
            app_version: self.app_version.clone(),
            platform: self.platform.to_string(),
            event,
        };
        let line = serde_json::to_string(&entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// The newest `limit` entries, oldest first.
    ///
    /// Lines that fail to parse (a truncated write, an older layout) are
    /// skipped rather than failing the whole read.
    pub fn recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries: Vec<LogEntry> = reader
            .lines()
            .filter_map(|line| line.ok())
            .filter_map(|line| serde_json::from_str(&line).ok())
            .collect();

        if entries.len() > limit {
            entries.drain(..entries.len() - limit);
        }
        Ok(entries)
    }
}
