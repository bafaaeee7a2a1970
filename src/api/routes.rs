/// Route definitions.

use axum::{Router, routing::get};

use crate::api::{AppState, handlers};

/// Create the main router with all routes.
///
/// The static segments (`precipitation`, `stations`, `tobs`) take priority
/// over the `{start}` capture, so a request for `/api/v1.0/stations` never
/// reaches the date handler.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/v1.0/precipitation", get(handlers::precipitation))
        .route("/api/v1.0/stations", get(handlers::stations))
        .route("/api/v1.0/tobs", get(handlers::tobs))
        .route("/api/v1.0/{start}", get(handlers::normals_start))
        .route("/api/v1.0/{start}/{end}", get(handlers::normals_range))
        .with_state(state)
}
