use axum::http::Method;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

/// Liveness probe that echoes the request method.
pub async fn api_test(method: Method) -> Json<Value> {
    Json(json!({
        "message": "API is working!",
        "method": method.as_str(),
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

pub async fn health() -> &'static str {
    "ok"
}
