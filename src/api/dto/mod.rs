//! API DTOs and the shared response envelope

use serde::{Deserialize, Serialize};

pub mod files_dto;
pub mod logs_dto;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub is_successful: bool,
    pub data: Option<T>,
    pub error_msg: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            is_successful: true,
            data: Some(data),
            error_msg: None,
        }
    }
}
