use tracing::info;

use crate::app_state::AppState;

/// Runs only when in LOGMASTER_DEBUG_MODE: one scan of the log root, then exit.
pub async fn run_debug(state: &AppState) -> anyhow::Result<()> {
    info!("🔧 Debug mode: scanning {:?}", state.config.log_root);

    let snapshot = state.log_service.stats().await?;
    info!(
        total = snapshot.total_logs,
        ips = snapshot.active_businesses,
        skipped = snapshot.skipped_entries.len(),
        "Today's statistics"
    );
    for top in &snapshot.top_interfaces {
        info!(interface = %top.interface, count = top.count, "Top interface");
    }

    let structure = state.file_service.structure().await?;
    info!(
        files = structure.file_count,
        size = %structure.total_size,
        "Log tree"
    );

    info!("Debug tasks completed. Exiting...");
    Ok(())
}
