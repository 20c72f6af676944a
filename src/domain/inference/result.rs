//! Inference result type returned to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The outcome of one inference request, real or placeholder.
///
/// Either parsed from the remote predictor (with model name and receipt
/// timestamp stamped on) or synthesized by the fallback table. Never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    /// Class index or continuous score(s). Classifiers put class indices
    /// here too, so they serialize as floats on the wire (`[2.0]`, not
    /// `[2]`).
    pub prediction: Vec<f64>,
    /// Per-class probabilities, one row per prediction, when the model
    /// provides them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<Vec<Vec<f64>>>,
    /// Model identifier embedded in the remote payload, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// The model name the caller requested, original casing preserved.
    pub model_name: String,
    /// Wall-clock time the result was produced.
    pub timestamp: DateTime<Utc>,
    /// True when this is a deterministic placeholder rather than a real
    /// model output.
    pub is_mock: bool,
}
