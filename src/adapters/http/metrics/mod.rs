//! Metrics HTTP module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::MetricHandlers;
pub use routes::metric_routes;
