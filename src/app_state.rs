use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::core::persistence::logs::log_repository::LogRepositoryImpl;
use crate::domain::files::service::file_service::FileService;
use crate::domain::logs::service::log_service::LogService;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path($($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub started_at: DateTime<Utc>,
    pub log_service: Arc<LogService<LogRepositoryImpl>>,
    pub file_service: Arc<FileService<LogRepositoryImpl>>,
    pub system_service: Arc<SystemService>,
}

pub fn build_app_state(config: AppConfig) -> AppState {
    let repo = Arc::new(LogRepositoryImpl::new(config.log_root.clone()));

    AppState {
        config: Arc::new(config),
        started_at: Utc::now(),
        log_service: Arc::new(LogService::new(Arc::clone(&repo))),
        file_service: Arc::new(FileService::new(repo)),
        system_service: Arc::new(SystemService::default()),
    }
}

#[derive(Clone, Default)]
pub struct SystemService;

impl SystemService {
    delegate_async_service! {
        fn health(started_at: DateTime<Utc>) -> serde_json::Value => crate::domain::system::service::health_service::health;
        fn status(log_root: std::path::PathBuf) -> serde_json::Value => crate::domain::system::service::status_service::status;
        fn metrics() -> crate::domain::logs::model::SystemMetrics => crate::domain::system::service::metrics_service::metrics;
    }
}
