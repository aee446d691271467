use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A daily log file found on disk.
#[derive(Debug, Clone)]
pub struct LogFileEntity {
    pub path: PathBuf,
    /// Path-derived `(ip, interface)`; `None` when the file sits less than two levels below the root.
    pub origin: Option<(String, String)>,
    pub file_name: String,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

impl LogFileEntity {
    pub fn ip(&self) -> &str {
        self.origin.as_ref().map(|(ip, _)| ip.as_str()).unwrap_or("")
    }

    pub fn interface(&self) -> &str {
        self.origin.as_ref().map(|(_, i)| i.as_str()).unwrap_or("")
    }
}

/// Something a best-effort scan had to leave out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub path: String,
    pub reason: String,
}

impl SkippedEntry {
    pub fn new(path: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result of a scan together with everything it skipped.
#[derive(Debug, Clone)]
pub struct ScanReport<T> {
    pub value: T,
    pub skipped: Vec<SkippedEntry>,
}

impl<T> ScanReport<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            skipped: Vec::new(),
        }
    }

    pub fn skip(&mut self, entry: SkippedEntry) {
        tracing::debug!(path = %entry.path, reason = %entry.reason, "Skipping log entry");
        self.skipped.push(entry);
    }

    pub fn is_degraded(&self) -> bool {
        !self.skipped.is_empty()
    }
}
