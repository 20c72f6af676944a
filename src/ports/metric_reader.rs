//! MetricReader port for health metric queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::metrics::{MetricKind, MetricSample};

/// Query operations for metric samples.
///
/// # Contract
///
/// Implementations must:
/// - Return only samples belonging to `user_id` with `kind` in `kinds`
///   and `captured_at >= since`
/// - Order results most-recent-first (the feature vector builder keeps
///   the first occurrence per kind)
/// - Return an empty vec, not an error, when nothing matches
#[async_trait]
pub trait MetricReader: Send + Sync {
    /// List a user's samples of the given kinds captured since `since`.
    async fn find_recent(
        &self,
        user_id: UserId,
        kinds: &[MetricKind],
        since: DateTime<Utc>,
    ) -> Result<Vec<MetricSample>, DomainError>;
}
