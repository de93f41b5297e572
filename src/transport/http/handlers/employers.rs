use crate::domain::employer::Employer;
use crate::transport::http::types::{store_error_response, ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Lists every persisted employer.
#[utoipa::path(
    get,
    path = "/employers",
    responses(
        (status = 200, description = "All employers", body = [Employer]),
        (status = 500, description = "Store rejected the read", body = ApiResponse),
        (status = 503, description = "Store unreachable", body = ApiResponse)
    )
)]
pub async fn list_employers_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.repository.list_all().await {
        Ok(employers) => (StatusCode::OK, Json(employers)).into_response(),
        Err(e) => {
            tracing::error!(event = "http_list_employers", status = "error", error = %e);
            store_error_response(&e).into_response()
        }
    }
}
