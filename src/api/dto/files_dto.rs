//! File API DTOs

use serde::Deserialize;

use crate::core::persistence::logs::log_path::is_plain_segment;

#[derive(Deserialize, Debug, Default)]
pub struct LogDownloadQuery {
    pub ip: Option<String>,
    pub interface: Option<String>,
    pub date: Option<String>,
}

impl LogDownloadQuery {
    fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("ip", self.ip.as_deref().unwrap_or("")),
            ("interface", self.interface.as_deref().unwrap_or("")),
            ("date", self.date.as_deref().unwrap_or("")),
        ]
    }

    /// Names of parameters that are absent or empty.
    pub fn missing_params(&self) -> Vec<&'static str> {
        self.params()
            .into_iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Names of parameters that would not stay inside the log tree.
    pub fn invalid_params(&self) -> Vec<&'static str> {
        self.params()
            .into_iter()
            .filter(|(_, v)| !v.is_empty() && !is_plain_segment(v))
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_and_invalid_names() {
        let q = LogDownloadQuery {
            ip: Some("10.0.0.1".into()),
            interface: Some(String::new()),
            date: None,
        };
        assert_eq!(q.missing_params(), vec!["interface", "date"]);

        let q = LogDownloadQuery {
            ip: Some("..".into()),
            interface: Some("HOTEL".into()),
            date: Some("../../etc/passwd".into()),
        };
        assert!(q.missing_params().is_empty());
        assert_eq!(q.invalid_params(), vec!["ip", "date"]);
    }
}
