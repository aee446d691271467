use std::path::{Component, Path, PathBuf};

use chrono::NaiveDate;

pub const LOG_FILE_EXTENSION: &str = "log";

/// `YYYY-MM-DD`, the stamp every daily log file name carries.
pub fn day_stamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `<root>/<ip>/<interface>/<stamp>.log`
pub fn log_file_path(root: &Path, ip: &str, interface: &str, stamp: &str) -> PathBuf {
    root.join(ip)
        .join(interface)
        .join(format!("{}.{}", stamp, LOG_FILE_EXTENSION))
}

/// First two path segments below `root`, if there are at least two.
pub fn origin_segments(root: &Path, path: &Path) -> Option<(String, String)> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = rel.components().filter_map(|c| match c {
        Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
        _ => None,
    });

    let ip = parts.next()?;
    let interface = parts.next()?;
    Some((ip, interface))
}

/// A single directory or file name: no separators, no parent/current dir references.
pub fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains('/')
        && !segment.contains('\\')
        && !segment.contains('\0')
}
