use crate::domain::error::StoreError;
use crate::domain::repository::EmployerRepository;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn EmployerRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn EmployerRepository>) -> Self {
        Self { repository }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Maps a store failure to the status the API reports for it.
pub fn store_error_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::Transport(_) => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::ConstraintViolation { .. } | StoreError::InvalidData(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn store_error_response(err: &StoreError) -> (StatusCode, Json<ApiResponse>) {
    (store_error_status(err), Json(ApiResponse::failure(err.to_string())))
}
