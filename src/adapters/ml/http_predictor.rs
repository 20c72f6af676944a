//! HTTP adapter for the external model-serving service.
//!
//! One synchronous POST per inference, `{base_url}/{model_name}` with the
//! feature vector as a flat JSON body. No retries: the orchestrator
//! treats every failure here as soft and falls back, so a second attempt
//! would only add latency to a best-effort path.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::inference::{FeatureVector, InferenceResult};
use crate::ports::{PredictorClient, PredictorError};

/// Configuration for the predictor client.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Base URL of the model-serving service, without trailing slash.
    pub base_url: String,
    /// Connect/read timeout for the single attempt.
    pub timeout: Duration,
}

impl PredictorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-based implementation of [`PredictorClient`].
pub struct HttpPredictorClient {
    config: PredictorConfig,
    client: Client,
}

impl HttpPredictorClient {
    pub fn new(config: PredictorConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn model_url(&self, model_name: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            model_name
        )
    }
}

#[async_trait]
impl PredictorClient for HttpPredictorClient {
    async fn predict(
        &self,
        model_name: &str,
        features: &FeatureVector,
    ) -> Result<InferenceResult, PredictorError> {
        let response = self
            .client
            .post(self.model_url(model_name))
            .header("Content-Type", "application/json")
            .json(features)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PredictorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    PredictorError::network(format!("Connection failed: {}", e))
                } else {
                    PredictorError::network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PredictorError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(PredictorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Err(PredictorError::EmptyBody);
        }

        let payload: PredictionPayload = serde_json::from_str(&body)
            .map_err(|e| PredictorError::malformed(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = payload.error {
            return Err(PredictorError::Remote(error));
        }

        let prediction = payload
            .prediction
            .ok_or_else(|| PredictorError::malformed("response carries no prediction"))?;

        Ok(InferenceResult {
            prediction,
            probabilities: payload.probabilities,
            model_id: payload.model_id,
            // Stamp the caller's name and receipt time; the remote's own
            // modelName, if any, is not authoritative.
            model_name: model_name.to_string(),
            timestamp: Utc::now(),
            is_mock: false,
        })
    }
}

// ----- Predictor API types -----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictionPayload {
    prediction: Option<Vec<f64>>,
    probabilities: Option<Vec<Vec<f64>>>,
    model_id: Option<String>,
    error: Option<String>,
}
