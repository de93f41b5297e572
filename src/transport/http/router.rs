use crate::domain::employer::Employer;
use crate::transport::http::handlers::{employers, health};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health::healthcheck_handler, employers::list_employers_handler),
    components(schemas(ApiResponse, Employer))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/employers", get(employers::list_employers_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .with_state(app_state)
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
