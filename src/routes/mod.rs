pub mod status;
pub mod submit_form;

use axum::http::{HeaderName, HeaderValue};
use axum::routing::{any, get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/submit-form",
            post(submit_form::submit)
                .options(submit_form::submit_options)
                .fallback(submit_form::method_not_allowed),
        )
        .route("/api/test", any(status::api_test))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        ))
}

pub fn status_routes() -> Router<SharedState> {
    Router::new().route("/health", get(status::health))
}
