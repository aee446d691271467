use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Stdout plus a daily rolling file under `app_log_dir`.
///
/// The returned guard flushes the file writer on drop and must be held by `main`.
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(&config.app_log_dir, "logmaster-api.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}
