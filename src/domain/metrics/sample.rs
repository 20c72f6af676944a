//! Health metric kinds and samples.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{UserId, ValidationError};

/// How far back the inference path looks for samples.
pub const LOOKBACK_HOURS: i64 = 24;

/// Returns the cutoff timestamp for the trailing lookback window.
pub fn lookback_since(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(LOOKBACK_HOURS)
}

/// The fixed allow-list of metric types the backend accepts.
///
/// Anything outside this list is rejected at ingestion and never reaches
/// the feature vector builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    HeartRate,
    BloodPressure,
    Temperature,
    OxygenSaturation,
    Steps,
    SleepHours,
}

impl MetricKind {
    /// Every allowed kind, in declaration order.
    pub const ALL: [MetricKind; 6] = [
        MetricKind::HeartRate,
        MetricKind::BloodPressure,
        MetricKind::Temperature,
        MetricKind::OxygenSaturation,
        MetricKind::Steps,
        MetricKind::SleepHours,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::HeartRate => "heart_rate",
            MetricKind::BloodPressure => "blood_pressure",
            MetricKind::Temperature => "temperature",
            MetricKind::OxygenSaturation => "oxygen_saturation",
            MetricKind::Steps => "steps",
            MetricKind::SleepHours => "sleep_hours",
        }
    }
}

impl FromStr for MetricKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heart_rate" => Ok(MetricKind::HeartRate),
            "blood_pressure" => Ok(MetricKind::BloodPressure),
            "temperature" => Ok(MetricKind::Temperature),
            "oxygen_saturation" => Ok(MetricKind::OxygenSaturation),
            "steps" => Ok(MetricKind::Steps),
            "sleep_hours" => Ok(MetricKind::SleepHours),
            other => Err(ValidationError::invalid_format(
                "metric_type",
                format!("unknown metric type '{}'", other),
            )),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single time-stamped health measurement.
///
/// Immutable once written; `captured_at` is assigned at ingestion and
/// never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    user_id: UserId,
    kind: MetricKind,
    value: f64,
    captured_at: DateTime<Utc>,
    source: Option<String>,
}

impl MetricSample {
    pub fn new(
        user_id: UserId,
        kind: MetricKind,
        value: f64,
        captured_at: DateTime<Utc>,
        source: Option<String>,
    ) -> Self {
        Self {
            user_id,
            kind,
            value,
            captured_at,
            source,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.as_str().parse::<MetricKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!("eeg_alpha".parse::<MetricKind>().is_err());
        assert!("".parse::<MetricKind>().is_err());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&MetricKind::HeartRate).unwrap();
        assert_eq!(json, "\"heart_rate\"");
    }

    #[test]
    fn lookback_is_24_hours() {
        let now = Utc::now();
        assert_eq!(now - lookback_since(now), Duration::hours(24));
    }
}
