//! ListMetrics - query handler for recent metric samples.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::metrics::{MetricKind, MetricSample, LOOKBACK_HOURS};
use crate::ports::MetricReader;

/// Longest queryable window, in hours (30 days).
pub const MAX_WINDOW_HOURS: i64 = 720;

/// Query for a user's recent samples.
#[derive(Debug, Clone)]
pub struct ListMetricsQuery {
    pub user_id: UserId,
    /// Restrict to one kind, or all allow-listed kinds when `None`.
    pub kind: Option<MetricKind>,
    /// Trailing window in hours; defaults to the inference lookback.
    pub window_hours: Option<i64>,
}

/// Handler for listing metric samples.
pub struct ListMetricsHandler {
    reader: Arc<dyn MetricReader>,
}

impl ListMetricsHandler {
    pub fn new(reader: Arc<dyn MetricReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListMetricsQuery) -> Result<Vec<MetricSample>, DomainError> {
        let hours = query
            .window_hours
            .unwrap_or(LOOKBACK_HOURS)
            .clamp(1, MAX_WINDOW_HOURS);
        let since = Utc::now() - Duration::hours(hours);

        let kinds: Vec<MetricKind> = match query.kind {
            Some(kind) => vec![kind],
            None => MetricKind::ALL.to_vec(),
        };

        self.reader.find_recent(query.user_id, &kinds, since).await
    }
}
