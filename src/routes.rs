use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use crate::api::controller::system::SystemController;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Stats, Logs, System, Files subrouters live under /api/v1
    let api_v1 = Router::new()
        .nest("/stats", crate::api::routes::stats_routes::stats_routes())
        .nest("/logs", crate::api::routes::logs_routes::logs_routes())
        .nest("/system", crate::api::routes::system_routes::system_routes())
        .nest("/files", crate::api::routes::files_routes::files_routes());

    Router::new()
        .route("/", get(root))
        .route("/health", get(SystemController::health))
        .nest("/api/v1", api_v1)
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

async fn root() -> &'static str {
    "LogMaster API is running!"
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
