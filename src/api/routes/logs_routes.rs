//! Log routes (e.g., /api/v1/logs/*)

use axum::{routing::{get, post}, Router};
use crate::api::controller::logs::LogsController;
use crate::app_state::AppState;

pub fn logs_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(LogsController::get_logs))
        .route("/search", post(LogsController::search_logs))
        .route("/recent", get(LogsController::get_recent_logs))
}
