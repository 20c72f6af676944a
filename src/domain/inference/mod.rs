//! Inference domain: feature vector assembly, result shape, and the
//! deterministic fallback table.

mod fallback;
mod feature_vector;
mod result;

pub use fallback::mock_result;
pub use feature_vector::{defaults, FeatureVector};
pub use result::InferenceResult;
