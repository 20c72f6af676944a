//! PostgreSQL adapter for MetricReader and MetricRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::metrics::{MetricKind, MetricSample};
use crate::ports::{MetricReader, MetricRepository};

/// PostgreSQL implementation of the metric ports over `health_metrics`.
pub struct PgMetricStore {
    pool: PgPool,
}

impl PgMetricStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MetricReader for PgMetricStore {
    async fn find_recent(
        &self,
        user_id: UserId,
        kinds: &[MetricKind],
        since: DateTime<Utc>,
    ) -> Result<Vec<MetricSample>, DomainError> {
        let kind_strs: Vec<String> = kinds.iter().map(|k| k.as_str().to_string()).collect();

        // Most-recent-first: the feature vector builder keeps the first
        // occurrence per kind, so this ordering makes that the latest one.
        let rows = sqlx::query(
            r#"
            SELECT user_id, metric_type, value, captured_at, source
            FROM health_metrics
            WHERE user_id = $1
              AND metric_type = ANY($2)
              AND captured_at >= $3
            ORDER BY captured_at DESC
            "#,
        )
        .bind(user_id.as_i64())
        .bind(&kind_strs)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e)))?;

        rows.iter()
            .map(|row| {
                let metric_type: String = row.get("metric_type");
                let kind: MetricKind = metric_type
                    .parse()
                    .map_err(|_| {
                        DomainError::new(
                            ErrorCode::InternalError,
                            format!("stored metric type '{}' is not allow-listed", metric_type),
                        )
                    })?;

                Ok(MetricSample::new(
                    UserId::new(row.get("user_id")),
                    kind,
                    row.get("value"),
                    row.get("captured_at"),
                    row.get("source"),
                ))
            })
            .collect()
    }
}

#[async_trait]
impl MetricRepository for PgMetricStore {
    async fn record(&self, sample: &MetricSample) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO health_metrics (user_id, metric_type, value, captured_at, source)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(sample.user_id().as_i64())
        .bind(sample.kind().as_str())
        .bind(sample.value())
        .bind(sample.captured_at())
        .bind(sample.source())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e)))?;

        Ok(())
    }
}
