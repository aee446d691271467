use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::logs::model::LogEntry;

pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// Search filter posted to `/logs/search`. Empty strings count as "not set".
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_time_window"))]
pub struct LogSearchRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub ip: Option<String>,
    pub interface: Option<String>,
    pub severity: Option<String>,
    pub search: Option<String>,
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<usize>,
}

fn validate_time_window(req: &LogSearchRequest) -> Result<(), ValidationError> {
    match (req.start_time, req.end_time) {
        (Some(start), Some(end)) if start > end => {
            Err(ValidationError::new("start_time_after_end_time"))
        }
        _ => Ok(()),
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

impl LogSearchRequest {
    pub fn ip(&self) -> Option<&str> {
        non_empty(&self.ip)
    }

    pub fn interface(&self) -> Option<&str> {
        non_empty(&self.interface)
    }

    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }

    /// Entry-level checks. IP and interface are compared against the
    /// directory the entry was read from, not the line's own `ip` /
    /// `interface` fields, so an interface filter also works without an
    /// IP filter.
    pub fn matches(&self, file_ip: &str, file_interface: &str, entry: &LogEntry) -> bool {
        if let Some(ip) = self.ip() {
            if file_ip != ip {
                return false;
            }
        }
        if let Some(interface) = self.interface() {
            if file_interface != interface {
                return false;
            }
        }
        if let Some(severity) = non_empty(&self.severity) {
            if !entry.severity.eq_ignore_ascii_case(severity) {
                return false;
            }
        }
        if let Some(needle) = non_empty(&self.search) {
            if !entry
                .message
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(start) = self.start_time {
            if entry.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end_time {
            if entry.timestamp > end {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn entry() -> LogEntry {
        LogEntry {
            id: "10.0.0.1-0".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap(),
            ip: "10.0.0.1".into(),
            interface: "HOTEL".into(),
            facility: "daemon".into(),
            severity: "WARNING".into(),
            message: "Guest Wi-Fi login failed".into(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(LogSearchRequest::default().matches("10.0.0.1", "HOTEL", &entry()));
    }

    #[test]
    fn severity_and_text_are_case_insensitive() {
        let req: LogSearchRequest = serde_json::from_value(json!({
            "severity": "warning",
            "search": "LOGIN",
            "interface": "HOTEL"
        }))
        .unwrap();
        assert!(req.matches("10.0.0.1", "HOTEL", &entry()));

        let req: LogSearchRequest =
            serde_json::from_value(json!({ "interface": "CAFE" })).unwrap();
        assert!(!req.matches("10.0.0.1", "HOTEL", &entry()));
    }

    #[test]
    fn time_window_is_inclusive() {
        let req: LogSearchRequest = serde_json::from_value(json!({
            "start_time": "2025-01-01T10:00:00Z",
            "end_time": "2025-01-01T10:00:00Z"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert!(req.matches("10.0.0.1", "HOTEL", &entry()));
    }

    #[test]
    fn origin_filters_ignore_fields_inside_the_line() {
        let mut relabelled = entry();
        relabelled.ip = "192.168.9.9".into();
        relabelled.interface = "OTHER".into();

        let req: LogSearchRequest =
            serde_json::from_value(json!({ "ip": "10.0.0.1", "interface": "HOTEL" })).unwrap();
        assert!(req.matches("10.0.0.1", "HOTEL", &relabelled));

        let req: LogSearchRequest =
            serde_json::from_value(json!({ "ip": "192.168.9.9" })).unwrap();
        assert!(!req.matches("10.0.0.1", "HOTEL", &relabelled));
    }

    #[test]
    fn validation_rejects_bad_limit_and_window() {
        let req: LogSearchRequest = serde_json::from_value(json!({ "limit": 5000 })).unwrap();
        assert!(req.validate().is_err());

        let req: LogSearchRequest = serde_json::from_value(json!({
            "start_time": "2025-01-02T00:00:00Z",
            "end_time": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn serialization_omits_unset_fields() {
        let req = LogSearchRequest {
            ip: Some("10.0.0.1".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "ip": "10.0.0.1" }));
    }
}
