//! Stats routes (e.g., /api/v1/stats/*)

use axum::{routing::get, Router};
use crate::api::controller::stats::StatsController;
use crate::app_state::AppState;

pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(StatsController::get_stats))
        .route("/interfaces", get(StatsController::get_interface_stats))
        .route("/ips", get(StatsController::get_ip_stats))
}
