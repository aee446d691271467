//! Stats controller: today's aggregates over the log tree

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::logs::model::{InterfaceShare, IpShare, StatsSnapshot};
use crate::errors::AppError;

pub struct StatsController;

impl StatsController {
    pub async fn get_stats(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<StatsSnapshot>>, AppError> {
        to_json(state.log_service.stats().await)
    }

    pub async fn get_interface_stats(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<BTreeMap<String, InterfaceShare>>>, AppError> {
        to_json(state.log_service.interface_stats().await)
    }

    pub async fn get_ip_stats(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<BTreeMap<String, IpShare>>>, AppError> {
        to_json(state.log_service.ip_stats().await)
    }
}
