pub mod config;
pub mod error;
pub mod state;
pub mod routes;
pub mod views;
pub mod sheets;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::sheets::SheetsApi;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config, sheets: Arc<dyn SheetsApi>) -> Router {
    match config.google.service_account() {
        Ok(account) => tracing::info!(
            "Appending to sheet {} range {} as {}",
            account.sheet_id,
            config.sheet_range,
            account.client_email
        ),
        Err(missing) => tracing::warn!("Google Sheets not configured: {missing}"),
    }

    let max_body_size = config.max_body_size;
    let state: SharedState = Arc::new(AppState { config, sheets });

    Router::new()
        .merge(routes::api_routes())
        .merge(routes::status_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new("static"))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(max_body_size)),
        )
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}
