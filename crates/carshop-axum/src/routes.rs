//! Route definitions and router construction.
//!
//! Car endpoints are nested under [`API_PREFIX`]. CORS is layered over the
//! whole router so error responses carry the headers too.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Path prefix for the car API.
pub const API_PREFIX: &str = "/api/v1";

/// Answers preflight requests from any origin.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the car routes without the version prefix.
///
/// The caller applies `.with_state()` before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/car/all", get(handlers::cars::list))
        .route("/car/add", post(handlers::cars::add))
        .route("/car/update", post(handlers::cars::update))
        .route("/car/delete", post(handlers::cars::remove))
        .route(
            "/car/{car_id}",
            get(handlers::cars::get).patch(handlers::cars::patch),
        )
}

/// Create the main application router.
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, api_routes().with_state(state))
        .layer(build_cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
async fn health_check() -> axum::Json<Value> {
    axum::Json(json!({
        "status": "ok",
        "service": "carshop",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
