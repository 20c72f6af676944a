//! DTOs for metric endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::metrics::MetricSample;

/// Request body for recording one sample.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetricRequest {
    /// One of the allow-listed kinds, e.g. "heart_rate".
    pub metric_type: String,
    pub value: f64,
    #[serde(default)]
    pub source: Option<String>,
}

/// Query parameters for listing samples.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetricsParams {
    #[serde(default)]
    pub metric_type: Option<String>,
    /// Trailing window in hours.
    #[serde(default)]
    pub hours: Option<i64>,
}

/// One sample in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSampleResponse {
    pub metric_type: String,
    pub value: f64,
    pub captured_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl From<MetricSample> for MetricSampleResponse {
    fn from(sample: MetricSample) -> Self {
        Self {
            metric_type: sample.kind().as_str().to_string(),
            value: sample.value(),
            captured_at: sample.captured_at(),
            source: sample.source().map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_request_deserializes() {
        let req: RecordMetricRequest = serde_json::from_value(json!({
            "metricType": "heart_rate",
            "value": 72.5,
            "source": "watch"
        }))
        .unwrap();
        assert_eq!(req.metric_type, "heart_rate");
        assert_eq!(req.value, 72.5);
        assert_eq!(req.source.as_deref(), Some("watch"));
    }

    #[test]
    fn list_params_default_to_none() {
        let params: ListMetricsParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.metric_type.is_none());
        assert!(params.hours.is_none());
    }
}
