//! PostgreSQL adapters.

mod metric_store;
mod user_store;

pub use metric_store::PgMetricStore;
pub use user_store::PgUserStore;
