//! HTTP routes for metric endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_metrics, record_metric, MetricHandlers};

/// Creates the metrics router.
pub fn metric_routes(handlers: MetricHandlers) -> Router {
    Router::new()
        .route("/", post(record_metric))
        .route("/", get(list_metrics))
        .with_state(handlers)
}
