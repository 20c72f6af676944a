//! DTOs for inference endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::inference::InferenceResult;

/// Response body for a completed inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResponse {
    pub prediction: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    pub model_name: String,
    pub timestamp: DateTime<Utc>,
    pub is_mock: bool,
}

impl From<InferenceResult> for InferenceResponse {
    fn from(result: InferenceResult) -> Self {
        Self {
            prediction: result.prediction,
            probabilities: result.probabilities,
            model_id: result.model_id,
            model_name: result.model_name,
            timestamp: result.timestamp,
            is_mock: result.is_mock,
        }
    }
}
