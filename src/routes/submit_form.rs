use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{parser, pipeline};

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let raw_data = if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parser::parse_multipart(&headers, body)
            .await
            .map_err(AppError::BadRequest)?
    } else {
        parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?
    };

    let result = pipeline::run(&state, raw_data).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": result.message,
            "updatedRange": result.updated_range,
        })),
    )
        .into_response())
}

pub async fn submit_options() -> Response {
    (
        [
            ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
        ],
        StatusCode::OK,
    )
        .into_response()
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
