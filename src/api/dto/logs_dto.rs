//! Log API DTOs

use serde::{Deserialize, Serialize};

use crate::core::persistence::logs::log_file_entity::SkippedEntry;
use crate::domain::logs::dto::log_search_request::LogSearchRequest;
use crate::domain::logs::model::LogEntry;

pub const DEFAULT_LOG_LIMIT: i64 = 100;
pub const MAX_LOG_LIMIT: i64 = 1000;

#[derive(Deserialize, Debug, Default)]
pub struct LogListQuery {
    pub ip: Option<String>,
    pub interface: Option<String>,
    /// Kept as text: a value that is not an integer falls back to the default.
    pub limit: Option<String>,
}

impl LogListQuery {
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|l| l.trim().parse::<i64>().ok())
            .map(|l| l.min(MAX_LOG_LIMIT))
            .unwrap_or(DEFAULT_LOG_LIMIT)
    }
}

#[derive(Serialize, Debug)]
pub struct LogListResponse {
    pub logs: Vec<LogEntry>,
    pub total: usize,
    pub page: usize,
    pub limit: i64,
    pub skipped_entries: Vec<SkippedEntry>,
}

#[derive(Serialize, Debug)]
pub struct RecentLogsResponse {
    pub logs: Vec<LogEntry>,
    pub count: usize,
}

#[derive(Serialize, Debug)]
pub struct LogSearchResponse {
    pub logs: Vec<LogEntry>,
    pub total: usize,
    pub filter: LogSearchRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>) -> LogListQuery {
        LogListQuery {
            limit: limit.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn limit_defaults_and_caps() {
        assert_eq!(query(None).effective_limit(), 100);
        assert_eq!(query(Some("abc")).effective_limit(), 100);
        assert_eq!(query(Some("25")).effective_limit(), 25);
        assert_eq!(query(Some("5000")).effective_limit(), 1000);
        assert_eq!(query(Some("-3")).effective_limit(), -3);
    }
}
