use anyhow::Result;

use crate::domain::logs::model::SystemMetrics;

pub async fn metrics() -> Result<SystemMetrics> {
    Ok(SystemMetrics::ILLUSTRATIVE)
}
