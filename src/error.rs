//! Unified error types for the query service.

use thiserror::Error;

/// Top-level error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Data access error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while running a query against the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Driver error: connectivity loss, malformed statement, decode failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store refused the request without reaching a database.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_converts_into_app_error() {
        let err: AppError = StoreError::Unavailable("offline".to_string()).into();
        assert_eq!(err.to_string(), "store error: store unavailable: offline");
    }

    #[test]
    fn sqlx_error_converts_into_store_error() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Database(sqlx::Error::PoolTimedOut)));
    }
}
