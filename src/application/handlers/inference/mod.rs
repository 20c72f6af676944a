//! Inference orchestration handlers.

mod run_inference;

pub use run_inference::{InferenceError, RunInferenceCommand, RunInferenceHandler};
