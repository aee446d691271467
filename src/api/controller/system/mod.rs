//! System controller: connects routes to system usecases

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::logs::model::SystemMetrics;
use crate::errors::{internal_error, AppError};

pub struct SystemController;

impl SystemController {
    /// Bare identity payload, not wrapped in `ApiResponse`.
    pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
        state
            .system_service
            .health(state.started_at)
            .await
            .map(Json)
            .map_err(internal_error)
    }

    pub async fn status(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.system_service.status(state.config.log_root.clone()).await)
    }

    pub async fn metrics(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<SystemMetrics>>, AppError> {
        to_json(state.system_service.metrics().await)
    }
}
