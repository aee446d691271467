use std::ops::ControlFlow;
use std::path::Path;

use anyhow::Result;

use super::log_file_entity::{LogFileEntity, ScanReport};

/// Filesystem access for the `<root>/<ip>/<interface>/<date>.log` tree.
pub trait LogFsAdapterTrait: Send + Sync {
    fn root(&self) -> &Path;

    /// Every regular file under the root whose name contains `name_filter` (all files if `None`),
    /// in lexical path order. Fails only when the root itself cannot be read.
    fn scan_files(&self, name_filter: Option<&str>) -> Result<ScanReport<Vec<LogFileEntity>>>;

    /// Names of the immediate subdirectories of `dir`, sorted.
    fn list_subdirs(&self, dir: &Path) -> Result<Vec<String>>;

    /// Entity for an explicit path. Does not require the file to exist.
    fn describe(&self, path: &Path) -> LogFileEntity;

    /// Newline-terminated lines plus a trailing partial line.
    fn count_lines(&self, path: &Path) -> Result<u64>;

    /// Feeds each line (without its line break) to `visitor` until it breaks or the file ends.
    fn visit_lines(
        &self,
        path: &Path,
        visitor: &mut dyn FnMut(&str) -> ControlFlow<()>,
    ) -> Result<()>;
}
