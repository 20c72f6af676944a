//! Deterministic placeholder predictions.
//!
//! When the lookback window holds no data for the user, or the remote
//! predictor soft-fails, the orchestrator serves a canned result from
//! this table. The table is the single source of truth for fallback
//! behavior and must track real model output shapes.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::result::InferenceResult;

struct MockRow {
    prediction: &'static [f64],
    probabilities: Option<&'static [&'static [f64]]>,
}

/// Model name (lowercased) to canned payload. Names not in the table get
/// [`UNKNOWN_MODEL_ROW`].
static FALLBACK_TABLE: Lazy<HashMap<&'static str, MockRow>> = Lazy::new(|| {
    HashMap::from([
        (
            "stress_level_classifier",
            MockRow {
                prediction: &[1.0],
                probabilities: Some(&[&[0.2, 0.6, 0.2]]),
            },
        ),
        (
            "mood_predictor",
            MockRow {
                prediction: &[2.0],
                probabilities: Some(&[&[0.1, 0.2, 0.7]]),
            },
        ),
        (
            "anxiety_level_classifier",
            MockRow {
                prediction: &[0.0],
                probabilities: Some(&[&[0.7, 0.2, 0.1]]),
            },
        ),
        (
            "sleep_quality_predictor",
            MockRow {
                prediction: &[7.5],
                probabilities: None,
            },
        ),
        (
            "user_normal_range_predictor",
            MockRow {
                prediction: &[1.0],
                probabilities: None,
            },
        ),
        (
            "anomaly_detector",
            MockRow {
                prediction: &[0.0],
                probabilities: None,
            },
        ),
    ])
});

const UNKNOWN_MODEL_ROW: MockRow = MockRow {
    prediction: &[0.0],
    probabilities: None,
};

/// Builds the placeholder result for `model_name`.
///
/// Matching is case-insensitive; the response echoes the caller's
/// original casing. `at` becomes the stamped timestamp, so repeated calls
/// differ only in that field.
pub fn mock_result(model_name: &str, at: DateTime<Utc>) -> InferenceResult {
    let key = model_name.to_ascii_lowercase();
    let row = FALLBACK_TABLE.get(key.as_str()).unwrap_or(&UNKNOWN_MODEL_ROW);

    InferenceResult {
        prediction: row.prediction.to_vec(),
        probabilities: row
            .probabilities
            .map(|rows| rows.iter().map(|r| r.to_vec()).collect()),
        model_id: None,
        model_name: model_name.to_string(),
        timestamp: at,
        is_mock: true,
    }
}
