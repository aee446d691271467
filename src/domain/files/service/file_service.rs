use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task;

use crate::core::persistence::logs::log_file_entity::SkippedEntry;
use crate::core::persistence::logs::log_path::LOG_FILE_EXTENSION;
use crate::core::persistence::logs::log_repository_trait::LogRepository;

#[derive(Debug, Clone, Serialize)]
pub struct InterfaceDirectory {
    pub name: String,
    /// Newest first.
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IpDirectory {
    pub ip: String,
    pub interfaces: Vec<InterfaceDirectory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileStructure {
    pub base_path: String,
    pub directories: Vec<IpDirectory>,
    pub file_count: usize,
    pub total_bytes: u64,
    pub total_size: String,
    pub last_updated: DateTime<Utc>,
    pub skipped_entries: Vec<SkippedEntry>,
}

/// A log file ready to be streamed as an attachment.
#[derive(Debug, Clone)]
pub struct LogDownload {
    pub file_name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

pub fn download_file_name(ip: &str, interface: &str, date: &str) -> String {
    format!("{}-{}-{}.{}", ip, interface, date, LOG_FILE_EXTENSION)
}

/// `1536` → `"1.5 KB"`
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Layout of the log tree as `ip → interface → files`.
pub fn describe_structure<R: LogRepository + ?Sized>(repo: &R, now: DateTime<Utc>) -> FileStructure {
    let base_path = repo.root().display().to_string();
    let mut tree: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();
    let mut skipped = Vec::new();
    let mut file_count = 0;
    let mut total_bytes = 0;

    match repo.scan_all() {
        Ok(scan) => {
            skipped = scan.skipped;
            let suffix = format!(".{}", LOG_FILE_EXTENSION);
            for file in scan.value {
                let Some((ip, interface)) = file.origin else {
                    continue;
                };
                if !file.file_name.ends_with(&suffix) {
                    continue;
                }
                file_count += 1;
                total_bytes += file.size_bytes;
                tree.entry(ip)
                    .or_default()
                    .entry(interface)
                    .or_default()
                    .push(file.file_name);
            }
        }
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "Log root not readable, reporting empty structure");
        }
    }

    let directories = tree
        .into_iter()
        .map(|(ip, interfaces)| IpDirectory {
            ip,
            interfaces: interfaces
                .into_iter()
                .map(|(name, mut files)| {
                    files.sort_by(|a, b| b.cmp(a));
                    InterfaceDirectory { name, files }
                })
                .collect(),
        })
        .collect();

    FileStructure {
        base_path,
        directories,
        file_count,
        total_bytes,
        total_size: human_size(total_bytes),
        last_updated: now,
        skipped_entries: skipped,
    }
}

pub struct FileService<R: LogRepository + 'static> {
    repo: Arc<R>,
}

impl<R: LogRepository + 'static> FileService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn structure(&self) -> Result<FileStructure> {
        let repo = Arc::clone(&self.repo);
        task::spawn_blocking(move || describe_structure(&*repo, Utc::now()))
            .await
            .context("structure scan task failed")
    }

    /// `None` when `<root>/<ip>/<interface>/<date>.log` does not exist.
    /// Segments must already be validated as plain names.
    pub async fn download(
        &self,
        ip: &str,
        interface: &str,
        date: &str,
    ) -> Result<Option<LogDownload>> {
        let path = self.repo.stamped_path(ip, interface, date);

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("Failed to stat {:?}", path)),
        };
        if !metadata.is_file() {
            return Ok(None);
        }

        Ok(Some(LogDownload {
            file_name: download_file_name(ip, interface, date),
            path,
            size_bytes: metadata.len(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::logs::log_repository::LogRepositoryImpl;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn human_size_picks_unit() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn structure_groups_by_ip_and_interface() {
        let dir = tempdir().unwrap();
        write(dir.path(), "192.168.1.100/HOTEL/2025-07-29.log", "ab");
        write(dir.path(), "192.168.1.100/HOTEL/2025-07-30.log", "abc");
        write(dir.path(), "192.168.1.100/general/2025-07-30.log", "a");
        write(dir.path(), "192.168.1.101/CAFE/2025-07-30.log", "a");
        write(dir.path(), "192.168.1.101/CAFE/notes.txt", "ignored");

        let repo = LogRepositoryImpl::new(dir.path());
        let s = describe_structure(&repo, Utc::now());

        assert_eq!(s.file_count, 4);
        assert_eq!(s.total_bytes, 7);
        assert_eq!(s.directories.len(), 2);
        assert_eq!(s.directories[0].ip, "192.168.1.100");
        assert_eq!(s.directories[0].interfaces[0].name, "HOTEL");
        assert_eq!(
            s.directories[0].interfaces[0].files,
            vec!["2025-07-30.log", "2025-07-29.log"]
        );
        assert_eq!(s.directories[1].interfaces[0].files, vec!["2025-07-30.log"]);
    }

    #[test]
    fn structure_of_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let repo = LogRepositoryImpl::new(dir.path().join("missing"));
        let s = describe_structure(&repo, Utc::now());
        assert_eq!(s.file_count, 0);
        assert!(s.directories.is_empty());
    }

    #[tokio::test]
    async fn download_locates_existing_file() {
        let dir = tempdir().unwrap();
        write(dir.path(), "10.0.0.1/HOTEL/2025-01-01.log", "hello\n");
        let svc = FileService::new(Arc::new(LogRepositoryImpl::new(dir.path())));

        let found = svc.download("10.0.0.1", "HOTEL", "2025-01-01").await.unwrap().unwrap();
        assert_eq!(found.file_name, "10.0.0.1-HOTEL-2025-01-01.log");
        assert_eq!(found.path, dir.path().join("10.0.0.1/HOTEL/2025-01-01.log"));
        assert_eq!(found.size_bytes, 6);

        assert!(svc.download("10.0.0.1", "HOTEL", "2025-01-02").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn download_ignores_directory_with_log_name() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("10.0.0.1/HOTEL/2025-01-01.log")).unwrap();
        let svc = FileService::new(Arc::new(LogRepositoryImpl::new(dir.path())));

        assert!(svc.download("10.0.0.1", "HOTEL", "2025-01-01").await.unwrap().is_none());
    }
}
