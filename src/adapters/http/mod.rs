//! HTTP adapters: routers, handlers, DTOs, and middleware.

pub mod error;
pub mod inference;
pub mod metrics;
pub mod middleware;
pub mod users;
