use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    ops::ControlFlow,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use super::log_file_entity::{LogFileEntity, ScanReport, SkippedEntry};
use super::log_fs_adapter_trait::LogFsAdapterTrait;
use super::log_path::origin_segments;

/// Reads daily log files straight from disk. Holds no handles between calls.
#[derive(Debug, Clone)]
pub struct LogFsAdapter {
    root: PathBuf,
}

impl LogFsAdapter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn walk(
        &self,
        dir: &Path,
        name_filter: Option<&str>,
        report: &mut ScanReport<Vec<LogFileEntity>>,
    ) -> io::Result<()> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            match entry {
                Ok(e) => entries.push(e),
                Err(e) => report.skip(SkippedEntry::new(dir.display().to_string(), e)),
            }
        }
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    report.skip(SkippedEntry::new(path.display().to_string(), e));
                    continue;
                }
            };

            if file_type.is_dir() {
                if let Err(e) = self.walk(&path, name_filter, report) {
                    report.skip(SkippedEntry::new(path.display().to_string(), e));
                }
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            if let Some(filter) = name_filter {
                if !file_name.contains(filter) {
                    continue;
                }
            }

            let metadata = entry.metadata().ok();
            report.value.push(LogFileEntity {
                origin: origin_segments(&self.root, &path),
                file_name,
                size_bytes: metadata.as_ref().map(|m| m.len()).unwrap_or(0),
                modified: metadata
                    .and_then(|m| m.modified().ok())
                    .map(DateTime::<Utc>::from),
                path,
            });
        }

        Ok(())
    }
}

impl LogFsAdapterTrait for LogFsAdapter {
    fn root(&self) -> &Path {
        &self.root
    }

    fn scan_files(&self, name_filter: Option<&str>) -> Result<ScanReport<Vec<LogFileEntity>>> {
        let mut report = ScanReport::new(Vec::new());
        self.walk(&self.root, name_filter, &mut report)
            .with_context(|| format!("Failed to read log root {:?}", self.root))?;
        Ok(report)
    }

    fn list_subdirs(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {:?}", dir))? {
            let Ok(entry) = entry else {
                continue;
            };
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn describe(&self, path: &Path) -> LogFileEntity {
        let metadata = fs::metadata(path).ok();
        LogFileEntity {
            path: path.to_path_buf(),
            origin: origin_segments(&self.root, path),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size_bytes: metadata.as_ref().map(|m| m.len()).unwrap_or(0),
            modified: metadata
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Utc>::from),
        }
    }

    fn count_lines(&self, path: &Path) -> Result<u64> {
        let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
        let mut reader = BufReader::new(file);
        let mut lines = 0u64;
        let mut last_byte = None;

        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
            last_byte = buf.last().copied();
            let len = buf.len();
            reader.consume(len);
        }

        if matches!(last_byte, Some(b) if b != b'\n') {
            lines += 1;
        }
        Ok(lines)
    }

    fn visit_lines(
        &self,
        path: &Path,
        visitor: &mut dyn FnMut(&str) -> ControlFlow<()>,
    ) -> Result<()> {
        let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("Failed to read {:?}", path))?;
            if n == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            let line = String::from_utf8_lossy(&buf);
            if visitor(&line).is_break() {
                break;
            }
        }

        Ok(())
    }
}
