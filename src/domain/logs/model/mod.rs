//! Log domain types, rebuilt from disk on every request.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::persistence::logs::log_file_entity::SkippedEntry;

pub const DEFAULT_FACILITY: &str = "system";
pub const DEFAULT_SEVERITY: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub ip: String,
    pub interface: String,
    pub facility: String,
    pub severity: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceStat {
    pub interface: String,
    pub count: u64,
    pub last_seen: DateTime<Utc>,
}

/// Illustrative resource figures. Not measured from the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemMetrics {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub network_io: f64,
}

impl SystemMetrics {
    pub const ILLUSTRATIVE: SystemMetrics = SystemMetrics {
        cpu_usage: 5.0,
        memory_usage: 40.0,
        disk_usage: 10.0,
        network_io: 1.0,
    };
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub total_logs: u64,
    /// Distinct IPs with at least one counted file today.
    pub active_businesses: usize,
    pub system_status: String,
    pub last_update: DateTime<Utc>,
    pub interface_stats: BTreeMap<String, u64>,
    pub ip_stats: BTreeMap<String, u64>,
    pub log_volume_today: u64,
    pub log_volume_hour: u64,
    pub top_interfaces: Vec<InterfaceStat>,
    pub system_metrics: SystemMetrics,
    pub skipped_entries: Vec<SkippedEntry>,
    #[serde(skip)]
    pub ip_interfaces: BTreeMap<String, Vec<String>>,
}

impl StatsSnapshot {
    /// All-zero snapshot used when the log root cannot be scanned.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            total_logs: 0,
            active_businesses: 0,
            system_status: "healthy".to_string(),
            last_update: now,
            interface_stats: BTreeMap::new(),
            ip_stats: BTreeMap::new(),
            log_volume_today: 0,
            log_volume_hour: 0,
            top_interfaces: Vec::new(),
            system_metrics: SystemMetrics::ILLUSTRATIVE,
            skipped_entries: Vec::new(),
            ip_interfaces: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceShare {
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpShare {
    pub count: u64,
    pub interfaces: Vec<String>,
}
