//! HTTP API module: the five read-only routes and their handlers.

pub mod endpoint;
pub mod handlers;
pub mod routes;

pub use endpoint::Endpoint;
pub use handlers::{AppState, FailureCause, QueryFailure, HEALTH_MESSAGE};
pub use routes::create_router;
