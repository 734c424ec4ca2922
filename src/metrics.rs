//! Prometheus metrics for query latency and failures.
//!
//! Every data endpoint records:
//! - How long its database round-trip took
//! - How many queries it issued
//! - How many of those failed

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::api::Endpoint;
use crate::error::AppError;

// === Metric Name Constants ===

/// Query latency metric name.
pub const METRIC_QUERY_LATENCY: &str = "db_query_latency_ms";
/// Queries issued counter metric name.
pub const METRIC_QUERIES: &str = "db_queries_total";
/// Failed queries counter metric name.
pub const METRIC_QUERY_FAILURES: &str = "db_query_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_QUERY_LATENCY,
        "Database round-trip latency per endpoint in milliseconds"
    );
    describe_counter!(METRIC_QUERIES, "Total number of database queries issued");
    describe_counter!(
        METRIC_QUERY_FAILURES,
        "Total number of database queries that failed"
    );

    debug!("Metrics initialized");
}

/// Serve the Prometheus scrape endpoint on its own listener.
///
/// Kept off the main router so the HTTP surface stays fixed.
pub fn install_exporter(port: u16) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Increment the query counter for an endpoint.
pub fn inc_queries(endpoint: Endpoint) {
    counter!(METRIC_QUERIES, "endpoint" => endpoint.label()).increment(1);
}

/// Increment the failure counter for an endpoint.
pub fn inc_query_failures(endpoint: Endpoint) {
    counter!(METRIC_QUERY_FAILURES, "endpoint" => endpoint.label()).increment(1);
}

/// RAII guard for timing a query.
/// Automatically records latency when dropped.
pub struct QueryTimer {
    start: Instant,
    endpoint: Endpoint,
}

impl QueryTimer {
    /// Start timing a query for the given endpoint.
    pub fn start(endpoint: Endpoint) -> Self {
        inc_queries(endpoint);
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for QueryTimer {
    fn drop(&mut self) {
        histogram!(METRIC_QUERY_LATENCY, "endpoint" => self.endpoint.label())
            .record(self.elapsed_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn query_timer_measures_time() {
        let timer = QueryTimer::start(Endpoint::Patients);
        sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed_ms();
        assert!(elapsed >= 9.0); // Allow some tolerance
    }
}
