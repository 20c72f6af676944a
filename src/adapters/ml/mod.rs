//! ML inference adapters.

mod http_predictor;

pub use http_predictor::{HttpPredictorClient, PredictorConfig};
