//! Application handlers, one per operation.

pub mod inference;
pub mod metrics;
pub mod users;
