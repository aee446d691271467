use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::logs::model::{LogEntry, DEFAULT_FACILITY, DEFAULT_SEVERITY};

/// Builds an entry from one log line.
///
/// JSON objects contribute their non-empty string fields; anything else becomes a
/// plain entry carrying the raw line. `ip`/`interface` are the path-derived defaults.
pub fn parse_line(
    line: &str,
    ip: &str,
    interface: &str,
    index: usize,
    now: DateTime<Utc>,
) -> LogEntry {
    let mut entry = LogEntry {
        id: format!("{}-{}", ip, index),
        timestamp: now,
        ip: ip.to_string(),
        interface: interface.to_string(),
        facility: DEFAULT_FACILITY.to_string(),
        severity: DEFAULT_SEVERITY.to_string(),
        message: line.to_string(),
    };

    let Ok(fields) = serde_json::from_str::<Map<String, Value>>(line) else {
        return entry;
    };

    if let Some(ts) = text_field(&fields, "timestamp") {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(ts) {
            entry.timestamp = parsed.with_timezone(&Utc);
        }
    }
    if let Some(v) = text_field(&fields, "ip") {
        entry.ip = v.to_string();
    }
    if let Some(v) = text_field(&fields, "interface") {
        entry.interface = v.to_string();
    }
    if let Some(v) = text_field(&fields, "facility") {
        entry.facility = v.to_string();
    }
    if let Some(v) = text_field(&fields, "severity") {
        entry.severity = v.to_string();
    }
    if let Some(v) = text_field(&fields, "message") {
        entry.message = v.to_string();
    }

    entry
}

fn text_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn json_line_without_origin_keeps_path_defaults() {
        let e = parse_line(
            r#"{"severity":"warning","message":"x"}"#,
            "10.0.0.1",
            "HOTEL",
            0,
            now(),
        );
        assert_eq!(e.ip, "10.0.0.1");
        assert_eq!(e.interface, "HOTEL");
        assert_eq!(e.severity, "warning");
        assert_eq!(e.message, "x");
        assert_eq!(e.facility, "system");
        assert_eq!(e.timestamp, now());
        assert_eq!(e.id, "10.0.0.1-0");
    }

    #[test]
    fn plain_text_line_is_kept_verbatim() {
        let e = parse_line("plain text line", "10.0.0.1", "CAFE", 7, now());
        assert_eq!(e.message, "plain text line");
        assert_eq!(e.facility, "system");
        assert_eq!(e.severity, "info");
        assert_eq!(e.interface, "CAFE");
        assert_eq!(e.id, "10.0.0.1-7");
    }

    #[test]
    fn json_fields_override_origin_when_non_empty() {
        let line = r#"{"timestamp":"2024-06-01T08:30:00+02:00","ip":"192.168.1.5","interface":"","facility":"daemon","message":"up"}"#;
        let e = parse_line(line, "10.0.0.1", "HOTEL", 3, now());

        assert_eq!(e.ip, "192.168.1.5");
        assert_eq!(e.interface, "HOTEL");
        assert_eq!(e.facility, "daemon");
        assert_eq!(e.severity, "info");
        assert_eq!(e.timestamp, Utc.with_ymd_and_hms(2024, 6, 1, 6, 30, 0).unwrap());
        // id keeps the path-derived ip
        assert_eq!(e.id, "10.0.0.1-3");
    }

    #[test]
    fn bad_timestamp_falls_back_to_now() {
        let e = parse_line(r#"{"timestamp":"yesterday"}"#, "ip", "if", 0, now());
        assert_eq!(e.timestamp, now());
        assert_eq!(e.message, r#"{"timestamp":"yesterday"}"#);
    }

    #[test]
    fn non_object_json_is_plain_text() {
        let e = parse_line("[1,2,3]", "ip", "if", 0, now());
        assert_eq!(e.message, "[1,2,3]");
        assert_eq!(e.severity, "info");
    }
}
