use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::config::MissingConfig;
use crate::sheets::SheetsError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Nama, email, dan pesan harus diisi";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const CONFIGURATION_MESSAGE: &str =
    "Server configuration error. Please check environment variables.";
pub const UPSTREAM_MESSAGE: &str = "Gagal menyimpan data ke Google Sheets";

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    MethodNotAllowed,
    Configuration(MissingConfig),
    Upstream(SheetsError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::MethodNotAllowed => write!(f, "{METHOD_NOT_ALLOWED_MESSAGE}"),
            AppError::Configuration(missing) => write!(f, "Configuration Error: {missing}"),
            AppError::Upstream(err) => write!(f, "Upstream Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": METHOD_NOT_ALLOWED_MESSAGE }),
            ),
            AppError::Configuration(missing) => {
                tracing::error!("Environment variables not set properly: {missing}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": CONFIGURATION_MESSAGE, "details": missing.to_string() }),
                )
            }
            AppError::Upstream(err) => {
                tracing::error!("Error saving to Google Sheets: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": UPSTREAM_MESSAGE, "details": err.to_string() }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<MissingConfig> for AppError {
    fn from(err: MissingConfig) -> Self {
        AppError::Configuration(err)
    }
}

impl From<SheetsError> for AppError {
    fn from(err: SheetsError) -> Self {
        AppError::Upstream(err)
    }
}
