use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;

use super::log_file_entity::{LogFileEntity, ScanReport};
use super::log_fs_adapter_trait::LogFsAdapterTrait;
use super::log_path::{day_stamp, log_file_path};

/// API-facing repository over the daily log tree.
pub trait LogRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn LogFsAdapterTrait;

    fn root(&self) -> &Path {
        self.fs_adapter().root()
    }

    /// Files whose name contains the `YYYY-MM-DD` stamp of `date`.
    fn scan_day(&self, date: NaiveDate) -> Result<ScanReport<Vec<LogFileEntity>>> {
        self.fs_adapter().scan_files(Some(&day_stamp(date)))
    }

    fn scan_all(&self) -> Result<ScanReport<Vec<LogFileEntity>>> {
        self.fs_adapter().scan_files(None)
    }

    fn interfaces_of(&self, ip: &str) -> Result<Vec<String>> {
        let dir = self.root().join(ip);
        self.fs_adapter().list_subdirs(&dir)
    }

    fn day_file(&self, ip: &str, interface: &str, date: NaiveDate) -> LogFileEntity {
        let path = log_file_path(self.root(), ip, interface, &day_stamp(date));
        self.fs_adapter().describe(&path)
    }

    /// `<root>/<ip>/<interface>/<stamp>.log`, whether or not it exists.
    fn stamped_path(&self, ip: &str, interface: &str, stamp: &str) -> PathBuf {
        log_file_path(self.root(), ip, interface, stamp)
    }

    fn count_lines(&self, file: &LogFileEntity) -> Result<u64> {
        self.fs_adapter().count_lines(&file.path)
    }

    fn visit_lines(
        &self,
        file: &LogFileEntity,
        visitor: &mut dyn FnMut(&str) -> ControlFlow<()>,
    ) -> Result<()> {
        self.fs_adapter().visit_lines(&file.path, visitor)
    }
}
