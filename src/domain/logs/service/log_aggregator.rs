use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};

use crate::core::persistence::logs::log_file_entity::{ScanReport, SkippedEntry};
use crate::core::persistence::logs::log_repository_trait::LogRepository;
use crate::domain::logs::model::{InterfaceStat, StatsSnapshot};

pub const TOP_INTERFACES_LIMIT: usize = 5;

/// Line-count statistics over every file stamped with `date`.
///
/// Only a failure to read the root is returned as an error; unreadable
/// directories and files end up in `skipped_entries`.
pub fn aggregate_day<R: LogRepository + ?Sized>(
    repo: &R,
    date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<StatsSnapshot> {
    let scan = repo.scan_day(date)?;
    let mut report = ScanReport {
        value: (),
        skipped: scan.skipped,
    };

    let mut interface_stats: BTreeMap<String, u64> = BTreeMap::new();
    let mut ip_stats: BTreeMap<String, u64> = BTreeMap::new();
    let mut ip_interfaces: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut last_seen: BTreeMap<String, DateTime<Utc>> = BTreeMap::new();
    let mut total_logs = 0u64;

    for file in &scan.value {
        let Some((ip, interface)) = &file.origin else {
            continue;
        };

        let lines = match repo.count_lines(file) {
            Ok(n) => n,
            Err(e) => {
                report.skip(SkippedEntry::new(file.path.display().to_string(), format!("{:#}", e)));
                continue;
            }
        };

        *interface_stats.entry(interface.clone()).or_default() += lines;
        *ip_stats.entry(ip.clone()).or_default() += lines;
        ip_interfaces
            .entry(ip.clone())
            .or_default()
            .insert(interface.clone());
        total_logs += lines;

        if let Some(modified) = file.modified {
            let seen = last_seen.entry(interface.clone()).or_insert(modified);
            if modified > *seen {
                *seen = modified;
            }
        }
    }

    let mut top_interfaces: Vec<InterfaceStat> = interface_stats
        .iter()
        .map(|(interface, &count)| InterfaceStat {
            interface: interface.clone(),
            count,
            last_seen: last_seen.get(interface).copied().unwrap_or(now),
        })
        .collect();
    // ties resolved by name so repeated scans agree
    top_interfaces.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.interface.cmp(&b.interface))
    });
    top_interfaces.truncate(TOP_INTERFACES_LIMIT);

    if report.is_degraded() {
        tracing::warn!(
            skipped = report.skipped.len(),
            "Statistics scan skipped unreadable entries"
        );
    }

    let mut snapshot = StatsSnapshot::empty(now);
    snapshot.total_logs = total_logs;
    snapshot.active_businesses = ip_stats.len();
    snapshot.log_volume_today = total_logs;
    snapshot.log_volume_hour = total_logs / 24;
    snapshot.interface_stats = interface_stats;
    snapshot.ip_stats = ip_stats;
    snapshot.top_interfaces = top_interfaces;
    snapshot.skipped_entries = report.skipped;
    snapshot.ip_interfaces = ip_interfaces
        .into_iter()
        .map(|(ip, set)| (ip, set.into_iter().collect()))
        .collect();

    Ok(snapshot)
}
