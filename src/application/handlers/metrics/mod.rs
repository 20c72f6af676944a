//! Metric ingestion and query handlers.

mod list_metrics;
mod record_metric;

pub use list_metrics::{ListMetricsHandler, ListMetricsQuery, MAX_WINDOW_HOURS};
pub use record_metric::{RecordMetricCommand, RecordMetricHandler};
