//! Logs controller: recent entries and search

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use validator::Validate;

use crate::api::dto::logs_dto::{
    LogListQuery, LogListResponse, LogSearchResponse, RecentLogsResponse,
};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::logs::dto::log_search_request::LogSearchRequest;
use crate::errors::AppError;

pub struct LogsController;

impl LogsController {
    pub async fn get_logs(
        State(state): State<AppState>,
        Query(query): Query<LogListQuery>,
    ) -> Result<Json<ApiResponse<LogListResponse>>, AppError> {
        let limit = query.effective_limit();
        let result = state
            .log_service
            .logs(query.ip, query.interface, limit)
            .await
            .map(|report| LogListResponse {
                total: report.value.len(),
                logs: report.value,
                page: 1,
                limit,
                skipped_entries: report.skipped,
            });
        to_json(result)
    }

    pub async fn get_recent_logs(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<RecentLogsResponse>>, AppError> {
        let result = state.log_service.recent().await.map(|logs| RecentLogsResponse {
            count: logs.len(),
            logs,
        });
        to_json(result)
    }

    pub async fn search_logs(
        State(state): State<AppState>,
        payload: Result<Json<LogSearchRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<LogSearchResponse>>, AppError> {
        let Json(filter) = payload.map_err(|e| AppError::BodyParsingError(e.body_text()))?;
        filter
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let result = state
            .log_service
            .search(filter.clone())
            .await
            .map(|report| LogSearchResponse {
                total: report.value.len(),
                logs: report.value,
                filter,
            });
        to_json(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::build_app_state;
    use crate::config::AppConfig;
    use crate::core::persistence::logs::log_path::day_stamp;
    use crate::domain::logs::service::log_service::today;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn get_logs_honours_limit_and_filters() {
        let dir = tempdir().unwrap();
        let file = dir
            .path()
            .join("10.0.0.1")
            .join("HOTEL")
            .join(format!("{}.log", day_stamp(today())));
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, "one\ntwo\nthree\n").unwrap();

        let state = build_app_state(AppConfig::with_log_root(dir.path()));
        let query = LogListQuery {
            ip: Some("10.0.0.1".into()),
            interface: Some("HOTEL".into()),
            limit: Some("2".into()),
        };

        let Json(res) = LogsController::get_logs(State(state), Query(query))
            .await
            .unwrap();
        let data = res.data.unwrap();
        assert_eq!(data.total, 2);
        assert_eq!(data.limit, 2);
        assert_eq!(data.page, 1);
        assert_eq!(data.logs[0].interface, "HOTEL");
    }

    #[tokio::test]
    async fn search_rejects_invalid_filter() {
        let dir = tempdir().unwrap();
        let state = build_app_state(AppConfig::with_log_root(dir.path()));
        let filter = LogSearchRequest {
            limit: Some(0),
            ..Default::default()
        };

        let err = LogsController::search_logs(State(state), Ok(Json(filter)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
