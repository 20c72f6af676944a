//! HTTP handlers for metric endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::metrics::{
    ListMetricsHandler, ListMetricsQuery, RecordMetricCommand, RecordMetricHandler,
};
use crate::application::handlers::users::{GetProfileHandler, GetProfileQuery};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::metrics::MetricKind;

use super::dto::{ListMetricsParams, MetricSampleResponse, RecordMetricRequest};

#[derive(Clone)]
pub struct MetricHandlers {
    record_handler: Arc<RecordMetricHandler>,
    list_handler: Arc<ListMetricsHandler>,
    profile_handler: Arc<GetProfileHandler>,
}

impl MetricHandlers {
    pub fn new(
        record_handler: Arc<RecordMetricHandler>,
        list_handler: Arc<ListMetricsHandler>,
        profile_handler: Arc<GetProfileHandler>,
    ) -> Self {
        Self {
            record_handler,
            list_handler,
            profile_handler,
        }
    }

    /// Metrics are keyed by the surrogate user id, so every endpoint
    /// first resolves the caller's profile.
    async fn resolve_user_id(
        &self,
        uid: &crate::domain::foundation::FirebaseUid,
    ) -> Result<Option<UserId>, DomainError> {
        let profile = self
            .profile_handler
            .handle(GetProfileQuery { uid: uid.clone() })
            .await?;
        Ok(profile.map(|p| p.id()))
    }
}

/// POST /api/metrics - Record one sample for the caller.
pub async fn record_metric(
    State(handlers): State<MetricHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RecordMetricRequest>,
) -> Response {
    let kind: MetricKind = match req.metric_type.parse() {
        Ok(kind) => kind,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Unknown metric type '{}'",
                    req.metric_type
                ))),
            )
                .into_response()
        }
    };

    if !req.value.is_finite() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Value must be a finite number")),
        )
            .into_response();
    }

    let user_id = match handlers.resolve_user_id(&user.uid).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found("User", user.uid.as_str())),
            )
                .into_response()
        }
        Err(e) => return handle_metric_error(e),
    };

    let cmd = RecordMetricCommand {
        user_id,
        kind,
        value: req.value,
        source: req.source,
    };

    match handlers.record_handler.handle(cmd).await {
        Ok(sample) => {
            let response: MetricSampleResponse = sample.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_metric_error(e),
    }
}

/// GET /api/metrics - List the caller's recent samples.
pub async fn list_metrics(
    State(handlers): State<MetricHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListMetricsParams>,
) -> Response {
    let kind = match params.metric_type.as_deref() {
        None => None,
        Some(s) => match s.parse::<MetricKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(format!(
                        "Unknown metric type '{}'",
                        s
                    ))),
                )
                    .into_response()
            }
        },
    };

    let user_id = match handlers.resolve_user_id(&user.uid).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found("User", user.uid.as_str())),
            )
                .into_response()
        }
        Err(e) => return handle_metric_error(e),
    };

    let query = ListMetricsQuery {
        user_id,
        kind,
        window_hours: params.hours,
    };

    match handlers.list_handler.handle(query).await {
        Ok(samples) => {
            let response: Vec<MetricSampleResponse> =
                samples.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_metric_error(e),
    }
}

fn handle_metric_error(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::ValidationFailed | ErrorCode::InvalidFormat => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("An unexpected error occurred")),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_400() {
        let error = DomainError::validation("metric_type", "bad kind");
        let response = handle_metric_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_error_maps_to_500() {
        let error = DomainError::new(ErrorCode::DatabaseError, "boom");
        let response = handle_metric_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
