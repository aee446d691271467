//! Files controller: tree listing and raw log download

use axum::body::Body;
use axum::extract::{Query, Request, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::{header, HeaderValue};
use tower_http::services::ServeFile;

use crate::api::dto::files_dto::LogDownloadQuery;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::files::service::file_service::FileStructure;
use crate::errors::{internal_error, AppError};

pub struct FilesController;

impl FilesController {
    pub async fn get_file_structure(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<FileStructure>>, AppError> {
        to_json(state.file_service.structure().await)
    }

    pub async fn download_log_file(
        State(state): State<AppState>,
        Query(query): Query<LogDownloadQuery>,
        request: Request,
    ) -> Result<Response, AppError> {
        let missing = query.missing_params();
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing required parameters: {}",
                missing.join(", ")
            )));
        }

        let invalid = query.invalid_params();
        if !invalid.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Invalid parameters: {}",
                invalid.join(", ")
            )));
        }

        let ip = query.ip.as_deref().unwrap_or_default();
        let interface = query.interface.as_deref().unwrap_or_default();
        let date = query.date.as_deref().unwrap_or_default();

        let file = state
            .file_service
            .download(ip, interface, date)
            .await
            .map_err(internal_error)?
            .ok_or_else(|| AppError::NotFound("Log file not found".to_string()))?;

        tracing::info!(file = %file.file_name, bytes = file.size_bytes, "Serving log download");

        let disposition = HeaderValue::from_str(&format!("attachment; filename={}", file.file_name))
            .map_err(internal_error)?;

        // Streams the body in chunks and handles Range / conditional requests.
        let mut res = ServeFile::new(&file.path)
            .try_call(request)
            .await
            .map_err(internal_error)?
            .map(Body::new);

        let headers = res.headers_mut();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"));
        headers.insert(header::CONTENT_DISPOSITION, disposition);

        Ok(res.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::build_app_state;
    use crate::config::AppConfig;
    use axum::body::to_bytes;
    use http::StatusCode;
    use std::fs;
    use tempfile::tempdir;

    fn request() -> Request {
        http::Request::builder()
            .uri("/api/v1/files/download")
            .body(Body::empty())
            .unwrap()
    }

    fn query(ip: &str, interface: &str, date: &str) -> Query<LogDownloadQuery> {
        Query(LogDownloadQuery {
            ip: Some(ip.into()),
            interface: Some(interface.into()),
            date: Some(date.into()),
        })
    }

    #[tokio::test]
    async fn download_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let state = build_app_state(AppConfig::with_log_root(dir.path()));

        let err = FilesController::download_log_file(
            State(state),
            query("10.0.0.1", "HOTEL", "2025-01-01"),
            request(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn download_existing_file_sets_disposition() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("10.0.0.1/HOTEL/2025-01-01.log");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "line one\nline two\n").unwrap();
        let state = build_app_state(AppConfig::with_log_root(dir.path()));

        let res = FilesController::download_log_file(
            State(state),
            query("10.0.0.1", "HOTEL", "2025-01-01"),
            request(),
        )
        .await
        .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=10.0.0.1-HOTEL-2025-01-01.log"
        );
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/octet-stream");
        assert_eq!(res.headers()[header::CONTENT_LENGTH], "18");
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"line one\nline two\n");
    }

    #[tokio::test]
    async fn download_honours_range_requests() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("10.0.0.1/HOTEL/2025-01-01.log");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "line one\nline two\n").unwrap();
        let state = build_app_state(AppConfig::with_log_root(dir.path()));

        let ranged = http::Request::builder()
            .uri("/api/v1/files/download")
            .header(header::RANGE, "bytes=9-16")
            .body(Body::empty())
            .unwrap();
        let res = FilesController::download_log_file(
            State(state),
            query("10.0.0.1", "HOTEL", "2025-01-01"),
            ranged,
        )
        .await
        .unwrap();

        assert_eq!(res.status(), StatusCode::PARTIAL_CONTENT);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"line two");
    }

    #[tokio::test]
    async fn download_lists_missing_parameters() {
        let dir = tempdir().unwrap();
        let state = build_app_state(AppConfig::with_log_root(dir.path()));

        let err = FilesController::download_log_file(
            State(state),
            query("10.0.0.1", "", ""),
            request(),
        )
        .await
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad request: Missing required parameters: interface, date"
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn download_refuses_path_traversal() {
        let dir = tempdir().unwrap();
        let state = build_app_state(AppConfig::with_log_root(dir.path()));

        let err = FilesController::download_log_file(
            State(state),
            query("..", "..", "passwd"),
            request(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
