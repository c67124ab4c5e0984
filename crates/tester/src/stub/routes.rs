use std::sync::Arc;

use axum::{
    Router,
    extract::Extension,
    http::{StatusCode, Uri, header},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use super::Payload;

/// Router for the stub: the products endpoint plus a health check.
pub fn router(payload: Arc<Payload>) -> Router {
    Router::new()
        .route("/products", get(products))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(Extension(payload))
}

pub async fn products(Extension(payload): Extension<Arc<Payload>>) -> axum::response::Response {
    tracing::debug!(status = payload.status.as_u16(), bytes = payload.body.len(), "serving products");
    (
        payload.status,
        [(header::CONTENT_TYPE, "application/json")],
        payload.body.clone(),
    )
        .into_response()
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found(uri: Uri) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", format!("no route for {}", uri.path()))
}

fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
