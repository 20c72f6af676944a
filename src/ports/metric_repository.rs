//! MetricRepository port for metric ingestion.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::metrics::MetricSample;

/// Write operations for metric samples.
///
/// Samples are immutable once written; there is no update or delete.
#[async_trait]
pub trait MetricRepository: Send + Sync {
    /// Persist one sample. The capture timestamp is already stamped by
    /// the caller and must be stored as-is.
    async fn record(&self, sample: &MetricSample) -> Result<(), DomainError>;
}
