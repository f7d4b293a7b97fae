//! Prometheus metrics for the product API.
//!
//! This module provides counters for:
//! - Products created, updated, and deleted
//! - Validation rejections (400s)
//! - Not-found responses (404s)
//! - Rejected auth attempts

use metrics::describe_counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

// === Metric Name Constants ===

/// Products created counter metric name.
pub const METRIC_PRODUCTS_CREATED: &str = "products_created_total";
/// Products updated counter metric name.
pub const METRIC_PRODUCTS_UPDATED: &str = "products_updated_total";
/// Products deleted counter metric name.
pub const METRIC_PRODUCTS_DELETED: &str = "products_deleted_total";
/// Validation rejections counter metric name.
pub const METRIC_VALIDATION_REJECTIONS: &str = "validation_rejections_total";
/// Not-found responses counter metric name.
pub const METRIC_NOT_FOUND_RESPONSES: &str = "not_found_responses_total";
/// Rejected auth attempts counter metric name.
pub const METRIC_AUTH_REJECTIONS: &str = "auth_rejections_total";

/// Install the Prometheus recorder and return the handle used by `/metrics`.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_PRODUCTS_CREATED, "Total products created");
    describe_counter!(METRIC_PRODUCTS_UPDATED, "Total products updated");
    describe_counter!(METRIC_PRODUCTS_DELETED, "Total products deleted");
    describe_counter!(
        METRIC_VALIDATION_REJECTIONS,
        "Total requests rejected with a validation error"
    );
    describe_counter!(
        METRIC_NOT_FOUND_RESPONSES,
        "Total requests answered with 404"
    );
    describe_counter!(
        METRIC_AUTH_REJECTIONS,
        "Total requests rejected by the API key check"
    );
}
