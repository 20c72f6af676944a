//! RunInference - the inference orchestrator.
//!
//! Per request, strictly in order: resolve the user, fetch the 24-hour
//! metric window, build the feature vector, call the remote predictor.
//! Every failure except an unresolvable identity collapses into the
//! deterministic fallback table, so the external contract is "always a
//! result, never an error, unless the user is unknown."

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::foundation::FirebaseUid;
use crate::domain::inference::{mock_result, FeatureVector, InferenceResult};
use crate::domain::metrics::{lookback_since, MetricKind};
use crate::ports::{MetricReader, PredictorClient, UserReader};

/// The sole hard failure the orchestrator raises.
#[derive(Debug, Clone, Error)]
pub enum InferenceError {
    /// The external identity has no registered profile.
    #[error("user not found: {uid}")]
    UserNotFound { uid: String },
}

/// Command to run one inference.
#[derive(Debug, Clone)]
pub struct RunInferenceCommand {
    pub uid: FirebaseUid,
    /// Path segment of the model endpoint, e.g. `stress_level_classifier`.
    /// Fallback matching is case-insensitive; the remote call uses the
    /// name verbatim.
    pub model_name: String,
}

/// Orchestrates a single inference request.
pub struct RunInferenceHandler {
    users: Arc<dyn UserReader>,
    metrics: Arc<dyn MetricReader>,
    predictor: Arc<dyn PredictorClient>,
}

impl RunInferenceHandler {
    pub fn new(
        users: Arc<dyn UserReader>,
        metrics: Arc<dyn MetricReader>,
        predictor: Arc<dyn PredictorClient>,
    ) -> Self {
        Self {
            users,
            metrics,
            predictor,
        }
    }

    pub async fn handle(
        &self,
        cmd: RunInferenceCommand,
    ) -> Result<InferenceResult, InferenceError> {
        let model = cmd.model_name.as_str();

        // Step 1: resolve the user. Not-found is the only error that
        // escapes; an infrastructure failure here falls into the
        // catch-all and serves the fallback.
        let profile = match self.users.find_by_external_id(&cmd.uid).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                return Err(InferenceError::UserNotFound {
                    uid: cmd.uid.to_string(),
                })
            }
            Err(e) => {
                warn!(uid = %cmd.uid, model, error = %e, "user lookup failed, serving fallback");
                return Ok(mock_result(model, Utc::now()));
            }
        };

        // Step 2: fetch the allow-listed metric window.
        let now = Utc::now();
        let samples = match self
            .metrics
            .find_recent(profile.id(), &MetricKind::ALL, lookback_since(now))
            .await
        {
            Ok(samples) => samples,
            Err(e) => {
                warn!(user_id = %profile.id(), model, error = %e, "metric fetch failed, serving fallback");
                return Ok(mock_result(model, Utc::now()));
            }
        };

        // Step 3: no data in the window means no remote call at all.
        if samples.is_empty() {
            debug!(user_id = %profile.id(), model, "no metrics in window, serving fallback");
            return Ok(mock_result(model, Utc::now()));
        }

        // Steps 4-5: build the vector and make the single remote attempt.
        let vector = FeatureVector::from_samples(&profile, &samples, now);

        match self.predictor.predict(model, &vector).await {
            Ok(result) => Ok(result),
            Err(e) => {
                // Step 6: every predictor failure is soft.
                warn!(user_id = %profile.id(), model, error = %e, "predictor soft failure, serving fallback");
                Ok(mock_result(model, Utc::now()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, UserId};
    use crate::domain::metrics::MetricSample;
    use crate::domain::user::UserProfile;
    use crate::ports::PredictorError;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubUsers {
        profile: Option<UserProfile>,
        fail: bool,
    }

    #[async_trait]
    impl UserReader for StubUsers {
        async fn find_by_external_id(
            &self,
            _uid: &FirebaseUid,
        ) -> Result<Option<UserProfile>, DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "pool exhausted"));
            }
            Ok(self.profile.clone())
        }
    }

    struct StubMetrics {
        samples: Vec<MetricSample>,
        fail: bool,
    }

    #[async_trait]
    impl MetricReader for StubMetrics {
        async fn find_recent(
            &self,
            _user_id: UserId,
            _kinds: &[MetricKind],
            _since: DateTime<Utc>,
        ) -> Result<Vec<MetricSample>, DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "query failed"));
            }
            Ok(self.samples.clone())
        }
    }

    struct StubPredictor {
        response: Result<InferenceResult, PredictorError>,
        calls: AtomicUsize,
    }

    impl StubPredictor {
        fn ok(result: InferenceResult) -> Self {
            Self {
                response: Ok(result),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(error: PredictorError) -> Self {
            Self {
                response: Err(error),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PredictorClient for StubPredictor {
        async fn predict(
            &self,
            _model_name: &str,
            _features: &FeatureVector,
        ) -> Result<InferenceResult, PredictorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    fn test_profile() -> UserProfile {
        UserProfile::new(
            UserId::new(5),
            FirebaseUid::new("fb-5").unwrap(),
            28,
            "Male",
            Utc::now(),
        )
        .unwrap()
    }

    fn sample(kind: MetricKind, value: f64) -> MetricSample {
        MetricSample::new(UserId::new(5), kind, value, Utc::now(), None)
    }

    fn real_result(model: &str) -> InferenceResult {
        InferenceResult {
            prediction: vec![1.0],
            probabilities: None,
            model_id: Some("v3".to_string()),
            model_name: model.to_string(),
            timestamp: Utc::now(),
            is_mock: false,
        }
    }

    fn cmd(model: &str) -> RunInferenceCommand {
        RunInferenceCommand {
            uid: FirebaseUid::new("fb-5").unwrap(),
            model_name: model.to_string(),
        }
    }

    fn handler(
        users: StubUsers,
        metrics: StubMetrics,
        predictor: Arc<StubPredictor>,
    ) -> RunInferenceHandler {
        RunInferenceHandler::new(Arc::new(users), Arc::new(metrics), predictor)
    }

    #[tokio::test]
    async fn unknown_user_is_the_only_hard_failure() {
        let predictor = Arc::new(StubPredictor::ok(real_result("mood_predictor")));
        let h = handler(
            StubUsers {
                profile: None,
                fail: false,
            },
            StubMetrics {
                samples: vec![sample(MetricKind::HeartRate, 80.0)],
                fail: false,
            },
            predictor.clone(),
        );

        let result = h.handle(cmd("mood_predictor")).await;
        assert!(matches!(result, Err(InferenceError::UserNotFound { .. })));
        // Hard failure short-circuits before any remote call.
        assert_eq!(predictor.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_window_skips_the_remote_call() {
        let predictor = Arc::new(StubPredictor::ok(real_result("mood_predictor")));
        let h = handler(
            StubUsers {
                profile: Some(test_profile()),
                fail: false,
            },
            StubMetrics {
                samples: vec![],
                fail: false,
            },
            predictor.clone(),
        );

        let result = h.handle(cmd("mood_predictor")).await.unwrap();
        assert!(result.is_mock);
        assert_eq!(result.prediction, vec![2.0]);
        assert_eq!(result.probabilities, Some(vec![vec![0.1, 0.2, 0.7]]));
        assert_eq!(predictor.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_prediction_is_returned_verbatim() {
        let predictor = Arc::new(StubPredictor::ok(real_result("anxiety_level_classifier")));
        let h = handler(
            StubUsers {
                profile: Some(test_profile()),
                fail: false,
            },
            StubMetrics {
                samples: vec![sample(MetricKind::HeartRate, 90.0)],
                fail: false,
            },
            predictor,
        );

        let result = h.handle(cmd("anxiety_level_classifier")).await.unwrap();
        assert!(!result.is_mock);
        assert_eq!(result.prediction, vec![1.0]);
        assert_eq!(result.model_id.as_deref(), Some("v3"));
    }

    #[tokio::test]
    async fn predictor_failure_falls_back() {
        let predictor = Arc::new(StubPredictor::failing(PredictorError::Timeout {
            timeout_secs: 5,
        }));
        let h = handler(
            StubUsers {
                profile: Some(test_profile()),
                fail: false,
            },
            StubMetrics {
                samples: vec![sample(MetricKind::SleepHours, 6.0)],
                fail: false,
            },
            predictor,
        );

        let result = h.handle(cmd("sleep_quality_predictor")).await.unwrap();
        assert!(result.is_mock);
        assert_eq!(result.prediction, vec![7.5]);
        assert!(result.probabilities.is_none());
    }

    #[tokio::test]
    async fn metric_fetch_failure_falls_back() {
        let predictor = Arc::new(StubPredictor::ok(real_result("mood_predictor")));
        let h = handler(
            StubUsers {
                profile: Some(test_profile()),
                fail: false,
            },
            StubMetrics {
                samples: vec![],
                fail: true,
            },
            predictor.clone(),
        );

        let result = h.handle(cmd("mood_predictor")).await.unwrap();
        assert!(result.is_mock);
        assert_eq!(predictor.call_count(), 0);
    }

    #[tokio::test]
    async fn user_lookup_infrastructure_failure_falls_back() {
        let predictor = Arc::new(StubPredictor::ok(real_result("anomaly_detector")));
        let h = handler(
            StubUsers {
                profile: None,
                fail: true,
            },
            StubMetrics {
                samples: vec![],
                fail: false,
            },
            predictor,
        );

        // A database error is not "user not found" and must not escape.
        let result = h.handle(cmd("anomaly_detector")).await.unwrap();
        assert!(result.is_mock);
        assert_eq!(result.prediction, vec![0.0]);
    }

    #[tokio::test]
    async fn fallback_preserves_requested_casing() {
        let predictor = Arc::new(StubPredictor::failing(PredictorError::EmptyBody));
        let h = handler(
            StubUsers {
                profile: Some(test_profile()),
                fail: false,
            },
            StubMetrics {
                samples: vec![sample(MetricKind::Steps, 4000.0)],
                fail: false,
            },
            predictor,
        );

        let result = h.handle(cmd("Mood_Predictor")).await.unwrap();
        assert_eq!(result.model_name, "Mood_Predictor");
        assert_eq!(result.prediction, vec![2.0]);
    }
}
