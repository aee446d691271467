//! File routes (e.g., /api/v1/files/*)

use axum::{routing::get, Router};
use crate::api::controller::files::FilesController;
use crate::app_state::AppState;

pub fn files_routes() -> Router<AppState> {
    Router::new()
        .route("/structure", get(FilesController::get_file_structure))
        .route("/download", get(FilesController::download_log_file))
}
