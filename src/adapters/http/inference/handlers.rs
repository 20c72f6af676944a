//! HTTP handlers for inference endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::inference::{
    InferenceError, RunInferenceCommand, RunInferenceHandler,
};

#[derive(Clone)]
pub struct InferenceHandlers {
    run_handler: Arc<RunInferenceHandler>,
}

impl InferenceHandlers {
    pub fn new(run_handler: Arc<RunInferenceHandler>) -> Self {
        Self { run_handler }
    }
}

/// POST /api/inference/:model_name - Run one inference for the caller.
pub async fn run_inference(
    State(handlers): State<InferenceHandlers>,
    RequireAuth(user): RequireAuth,
    Path(model_name): Path<String>,
) -> Response {
    let cmd = RunInferenceCommand {
        uid: user.uid,
        model_name,
    };

    match handlers.run_handler.handle(cmd).await {
        Ok(result) => {
            let response: super::dto::InferenceResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(InferenceError::UserNotFound { uid }) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("User", &uid)),
        )
            .into_response(),
    }
}
