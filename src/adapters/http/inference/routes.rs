//! HTTP routes for inference endpoints.

use axum::{routing::post, Router};

use super::handlers::{run_inference, InferenceHandlers};

/// Creates the inference router.
pub fn inference_routes(handlers: InferenceHandlers) -> Router {
    Router::new()
        .route("/:model_name", post(run_inference))
        .with_state(handlers)
}
