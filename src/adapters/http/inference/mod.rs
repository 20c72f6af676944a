//! Inference HTTP module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::InferenceHandlers;
pub use routes::inference_routes;
