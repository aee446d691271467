use std::ops::ControlFlow;

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::persistence::logs::log_file_entity::{LogFileEntity, ScanReport, SkippedEntry};
use crate::core::persistence::logs::log_path::is_plain_segment;
use crate::core::persistence::logs::log_repository_trait::LogRepository;
use crate::domain::logs::model::LogEntry;
use crate::domain::logs::service::line_parser::parse_line;

/// Up to `limit` entries from the files stamped with `date`, newest first.
///
/// An interface filter only narrows the file set together with an IP filter;
/// on its own it is ignored and the whole tree is read.
pub fn read_recent<R: LogRepository + ?Sized>(
    repo: &R,
    date: NaiveDate,
    ip: Option<&str>,
    interface: Option<&str>,
    limit: i64,
    now: DateTime<Utc>,
) -> ScanReport<Vec<LogEntry>> {
    if limit <= 0 {
        return ScanReport::new(Vec::new());
    }
    read_matching(repo, date, ip, interface, limit as usize, now, |_, _| true)
}

/// Like [`read_recent`], but only entries accepted by `matches` count toward `limit`.
/// The predicate also receives the file the entry was read from.
pub fn read_matching<R, F>(
    repo: &R,
    date: NaiveDate,
    ip: Option<&str>,
    interface: Option<&str>,
    limit: usize,
    now: DateTime<Utc>,
    matches: F,
) -> ScanReport<Vec<LogEntry>>
where
    R: LogRepository + ?Sized,
    F: Fn(&LogFileEntity, &LogEntry) -> bool,
{
    let mut report = ScanReport::new(Vec::new());
    if limit == 0 {
        return report;
    }

    let ip = ip.filter(|s| !s.is_empty());
    let interface = interface.filter(|s| !s.is_empty());
    let candidates = candidate_files(repo, date, ip, interface, &mut report);

    let mut entries: Vec<LogEntry> = Vec::new();
    for file in &candidates {
        if entries.len() >= limit {
            break;
        }

        let mut index = 0usize;
        let result = repo.visit_lines(file, &mut |line: &str| {
            if line.is_empty() {
                return ControlFlow::Continue(());
            }
            let entry = parse_line(line, file.ip(), file.interface(), index, now);
            index += 1;
            if matches(file, &entry) {
                entries.push(entry);
            }
            if entries.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        if let Err(e) = result {
            report.skip(SkippedEntry::new(file.path.display().to_string(), format!("{:#}", e)));
        }
    }

    // stable: equal timestamps keep file order
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limit);
    report.value = entries;
    report
}

fn candidate_files<R: LogRepository + ?Sized>(
    repo: &R,
    date: NaiveDate,
    ip: Option<&str>,
    interface: Option<&str>,
    report: &mut ScanReport<Vec<LogEntry>>,
) -> Vec<LogFileEntity> {
    for segment in ip.iter().chain(interface.iter()) {
        if !is_plain_segment(segment) {
            report.skip(SkippedEntry::new(*segment, "not a plain path segment"));
            return Vec::new();
        }
    }

    match (ip, interface) {
        (Some(ip), Some(interface)) => vec![repo.day_file(ip, interface, date)],
        // interfaces without a file for `date` are simply quiet that day
        (Some(ip), None) => match repo.interfaces_of(ip) {
            Ok(names) => names
                .iter()
                .map(|name| repo.day_file(ip, name, date))
                .filter(|file| file.path.is_file())
                .collect(),
            Err(e) => {
                report.skip(SkippedEntry::new(
                    repo.root().join(ip).display().to_string(),
                    format!("{:#}", e),
                ));
                Vec::new()
            }
        },
        _ => match repo.scan_day(date) {
            Ok(scan) => {
                report.skipped.extend(scan.skipped);
                scan.value
            }
            Err(e) => {
                report.skip(SkippedEntry::new(
                    repo.root().display().to_string(),
                    format!("{:#}", e),
                ));
                Vec::new()
            }
        },
    }
}
