//! RecordMetric - command handler for metric ingestion.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::metrics::{MetricKind, MetricSample};
use crate::ports::MetricRepository;

/// Command to record one metric sample.
#[derive(Debug, Clone)]
pub struct RecordMetricCommand {
    pub user_id: UserId,
    pub kind: MetricKind,
    pub value: f64,
    pub source: Option<String>,
}

/// Handler for recording metric samples.
pub struct RecordMetricHandler {
    repository: Arc<dyn MetricRepository>,
}

impl RecordMetricHandler {
    pub fn new(repository: Arc<dyn MetricRepository>) -> Self {
        Self { repository }
    }

    /// Stamps the capture time and persists the sample.
    pub async fn handle(&self, cmd: RecordMetricCommand) -> Result<MetricSample, DomainError> {
        let sample = MetricSample::new(cmd.user_id, cmd.kind, cmd.value, Utc::now(), cmd.source);
        self.repository.record(&sample).await?;
        Ok(sample)
    }
}
