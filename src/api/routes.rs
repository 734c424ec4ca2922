//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{
    health, list_patients, list_providers, patients_by_first_name, providers_by_specialty,
    AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/", get(health))
        // Listings
        .route("/patients", get(list_patients))
        .route("/providers", get(list_providers))
        // Exact-match filters
        .route("/patients/filter", get(patients_by_first_name))
        .route("/providers/specialty", get(providers_by_specialty))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
