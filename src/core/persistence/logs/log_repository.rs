use std::path::PathBuf;

use super::log_fs_adapter::LogFsAdapter;
use super::log_fs_adapter_trait::LogFsAdapterTrait;
use super::log_repository_trait::LogRepository;

pub struct LogRepositoryImpl {
    adapter: LogFsAdapter,
}

impl LogRepositoryImpl {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            adapter: LogFsAdapter::new(root),
        }
    }
}

impl LogRepository for LogRepositoryImpl {
    fn fs_adapter(&self) -> &dyn LogFsAdapterTrait {
        &self.adapter
    }
}
