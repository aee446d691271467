use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_ROOT: &str = "/var/log/logmaster";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_APP_LOG_DIR: &str = "logs";

/// Runtime configuration, resolved once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the `<ip>/<interface>/<date>.log` tree served by the API.
    pub log_root: PathBuf,
    pub host: String,
    pub port: u16,
    /// Directory for the service's own rolling log files.
    pub app_log_dir: PathBuf,
    pub debug_mode: bool,
}

impl AppConfig {
    pub fn load() -> Self {
        let port = env::var("LOGMASTER_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            log_root: env::var("LOGMASTER_LOG_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_ROOT)),
            host: env::var("LOGMASTER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            app_log_dir: env::var("LOGMASTER_APP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_APP_LOG_DIR)),
            debug_mode: env::var("LOGMASTER_DEBUG_MODE")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        }
    }

    /// Defaults for everything except the log root.
    #[cfg(test)]
    pub fn with_log_root(root: impl AsRef<std::path::Path>) -> Self {
        Self {
            log_root: root.as_ref().to_path_buf(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            app_log_dir: PathBuf::from(DEFAULT_APP_LOG_DIR),
            debug_mode: false,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
