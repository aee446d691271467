use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use tokio::task;
use tracing::{debug, warn};

use crate::core::persistence::logs::log_file_entity::ScanReport;
use crate::core::persistence::logs::log_repository_trait::LogRepository;
use crate::domain::logs::dto::log_search_request::LogSearchRequest;
use crate::domain::logs::model::{InterfaceShare, IpShare, LogEntry, StatsSnapshot};
use crate::domain::logs::service::log_aggregator::aggregate_day;
use crate::domain::logs::service::log_reader::{read_matching, read_recent};

pub const RECENT_LOGS_LIMIT: i64 = 10;

/// Local calendar day; log files are named after it.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Statistics and entry retrieval over the daily log tree.
///
/// Every call rescans the disk on the blocking pool.
pub struct LogService<R: LogRepository + 'static> {
    repo: Arc<R>,
}

impl<R: LogRepository + 'static> LogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&R) -> T + Send + 'static,
        T: Send + 'static,
    {
        let repo = Arc::clone(&self.repo);
        task::spawn_blocking(move || f(&*repo))
            .await
            .context("log scan task failed")
    }

    /// Today's snapshot. A root that cannot be scanned yields the zeroed snapshot.
    pub async fn stats(&self) -> Result<StatsSnapshot> {
        let date = today();
        let scanned = self
            .blocking(move |repo| aggregate_day(repo, date, Utc::now()))
            .await?;

        Ok(match scanned {
            Ok(snapshot) => {
                debug!(
                    total = snapshot.total_logs,
                    ips = snapshot.active_businesses,
                    "Computed log statistics"
                );
                snapshot
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Falling back to empty statistics");
                StatsSnapshot::empty(Utc::now())
            }
        })
    }

    pub async fn interface_stats(&self) -> Result<BTreeMap<String, InterfaceShare>> {
        let snapshot = self.stats().await?;
        let total = snapshot.total_logs;

        Ok(snapshot
            .interface_stats
            .into_iter()
            .map(|(interface, count)| {
                (
                    interface,
                    InterfaceShare {
                        count,
                        percentage: percentage(count, total),
                    },
                )
            })
            .collect())
    }

    pub async fn ip_stats(&self) -> Result<BTreeMap<String, IpShare>> {
        let mut snapshot = self.stats().await?;

        Ok(snapshot
            .ip_stats
            .into_iter()
            .map(|(ip, count)| {
                let interfaces = snapshot.ip_interfaces.remove(&ip).unwrap_or_default();
                (ip, IpShare { count, interfaces })
            })
            .collect())
    }

    pub async fn logs(
        &self,
        ip: Option<String>,
        interface: Option<String>,
        limit: i64,
    ) -> Result<ScanReport<Vec<LogEntry>>> {
        let date = today();
        self.blocking(move |repo| {
            read_recent(
                repo,
                date,
                ip.as_deref(),
                interface.as_deref(),
                limit,
                Utc::now(),
            )
        })
        .await
    }

    pub async fn recent(&self) -> Result<Vec<LogEntry>> {
        Ok(self.logs(None, None, RECENT_LOGS_LIMIT).await?.value)
    }

    pub async fn search(&self, req: LogSearchRequest) -> Result<ScanReport<Vec<LogEntry>>> {
        let date = today();
        self.blocking(move |repo| {
            let limit = req.effective_limit();
            read_matching(
                repo,
                date,
                req.ip(),
                req.interface(),
                limit,
                Utc::now(),
                |file, entry| req.matches(file.ip(), file.interface(), entry),
            )
        })
        .await
    }
}

/// Share of `total`, rounded to one decimal.
fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}
