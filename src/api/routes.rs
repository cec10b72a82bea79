//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::handlers::{
    get_hero_handler, health_handler, list_heroes_handler, not_found_handler, stats_handler,
    AppState,
};
use super::request_id::stamp_error_request_id;

/// Creates the main router with all endpoints configured.
///
/// Unsupported methods on known paths fall through to the same 404 as
/// unknown paths.
///
/// # Middleware
/// - Request id: Echoes `x-request-id` or generates a UUID
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/heroes",
            get(list_heroes_handler).fallback(not_found_handler),
        )
        .route(
            "/heroes/:hero_id",
            get(get_hero_handler).fallback(not_found_handler),
        )
        .route("/stats", get(stats_handler).fallback(not_found_handler))
        .route("/health", get(health_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(stamp_error_request_id))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
