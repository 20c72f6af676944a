//! PredictorClient port - interface to the external model-serving service.
//!
//! Every failure mode of the remote call is a *soft failure*: the
//! orchestrator converts any `PredictorError` into a deterministic
//! fallback result and never propagates it further. The variants exist so
//! soft failures stay distinguishable in logs even though they collapse
//! at the boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::inference::{FeatureVector, InferenceResult};

/// Port for remote model inference.
///
/// # Contract
///
/// Implementations must:
/// - Issue exactly one attempt per call (no retries at this layer)
/// - Bound the call with a connect/read timeout
/// - Stamp `model_name` (the caller's requested name) and a fresh receipt
///   timestamp onto successful results, with `is_mock = false`
#[async_trait]
pub trait PredictorClient: Send + Sync {
    /// Submit a feature vector to the named model endpoint.
    async fn predict(
        &self,
        model_name: &str,
        features: &FeatureVector,
    ) -> Result<InferenceResult, PredictorError>;
}

/// Soft-failure taxonomy for the remote predictor.
#[derive(Debug, Clone, Error)]
pub enum PredictorError {
    /// The request did not complete within the configured timeout.
    #[error("predictor timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Connection or transport failure.
    #[error("predictor network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("predictor returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx response with nothing in it.
    #[error("predictor returned an empty body")]
    EmptyBody,

    /// The body could not be parsed into a prediction.
    #[error("predictor response malformed: {0}")]
    Malformed(String),

    /// The service reported an error of its own in the payload.
    #[error("predictor reported error: {0}")]
    Remote(String),
}

impl PredictorError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}
