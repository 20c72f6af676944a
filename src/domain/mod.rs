//! Domain layer: pure types and logic, no I/O.

pub mod foundation;
pub mod inference;
pub mod metrics;
pub mod user;
