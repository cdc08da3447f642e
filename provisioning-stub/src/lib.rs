pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod startup;
pub mod store;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use startup::AppState;
use stub_core::middleware::cors::cors_middleware;
use tower_http::trace::TraceLayer;

/// Declarative route table for the whole API surface. The CORS middleware is
/// outermost so that preflights and fallback 404s get the headers too.
/// Unmatched methods on known paths fall back to the same not-found error as
/// unknown paths, never a bare 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/health",
            get(handlers::health::health_check).fallback(handlers::not_found),
        )
        .route(
            "/api/audit/logs",
            get(handlers::audit::read_logs).fallback(handlers::not_found),
        )
        .route(
            "/api/servers",
            get(handlers::servers::list_servers).fallback(handlers::not_found),
        )
        .route(
            "/api/servers/:serial",
            get(handlers::servers::get_server).fallback(handlers::not_found),
        )
        .route(
            "/api/servers/:serial/confirm",
            post(handlers::servers::confirm_server).fallback(handlers::not_found),
        )
        .route(
            "/api/servers/:serial/install",
            post(handlers::servers::install_server).fallback(handlers::not_found),
        )
        .route(
            "/api/configs",
            get(handlers::configs::list_templates)
                .post(handlers::configs::create_template)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/configs/:id",
            get(handlers::configs::get_template)
                .put(handlers::configs::update_template)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/configs/:id/apply",
            post(handlers::configs::apply_template).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(cors_middleware))
}
