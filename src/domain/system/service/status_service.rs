use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Value};

/// Reports whether the configured log root is present.
pub async fn status(log_root: PathBuf) -> Result<Value> {
    let exists = tokio::fs::metadata(&log_root)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);

    if !exists {
        tracing::warn!("Log directory {:?} is missing", log_root);
    }

    Ok(json!({
        "status": if exists { "healthy" } else { "degraded" },
        "log_directory": log_root.display().to_string(),
        "log_directory_exists": exists,
        "config_status": "loaded",
        "last_check": Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn degraded_without_log_root() {
        let dir = tempdir().unwrap();

        let ok = status(dir.path().to_path_buf()).await.unwrap();
        assert_eq!(ok["status"], "healthy");

        let missing = status(dir.path().join("gone")).await.unwrap();
        assert_eq!(missing["status"], "degraded");
        assert_eq!(missing["log_directory_exists"], false);
    }
}
