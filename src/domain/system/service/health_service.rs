use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "logmaster-api-gateway";

pub async fn health(started_at: DateTime<Utc>) -> Result<Value> {
    let now = Utc::now();
    Ok(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": now,
        "uptime": (now - started_at).num_seconds().max(0),
    }))
}
