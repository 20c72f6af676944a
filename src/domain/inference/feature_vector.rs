//! Feature vector assembly for the remote predictor.
//!
//! Every model endpoint in this system accepts the same fixed-shape flat
//! JSON object. The builder never fails: any metric absent from the input
//! window is absorbed by a documented default from [`defaults`].

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::metrics::{MetricKind, MetricSample};
use crate::domain::user::UserProfile;

/// Default values substituted when a source metric is missing.
///
/// The EEG bands, GSR, and activity type have no metric source in this
/// system at all and are always defaulted.
pub mod defaults {
    pub const EEG_ALPHA: f64 = 8.5;
    pub const EEG_BETA: f64 = 15.0;
    pub const EEG_GAMMA: f64 = 30.0;
    pub const EEG_THETA: f64 = 6.0;
    pub const EEG_DELTA: f64 = 2.0;
    pub const GSR: f64 = 5.0;
    pub const HEART_RATE: f64 = 75.0;
    pub const ACTIVITY_LEVEL: f64 = 5.0;
    pub const SLEEP_QUALITY: f64 = 7.0;
    pub const SKIN_TEMP: f64 = 37.0;
    /// 2 = "moderate".
    pub const ACTIVITY_TYPE: i64 = 2;
    /// Raw step counts are scaled down by this before entering the vector.
    pub const STEPS_PER_ACTIVITY_UNIT: f64 = 1000.0;
}

/// The fixed-shape numeric input contract of every remote model endpoint.
///
/// Constructed fresh per request and discarded after the remote call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub eeg_alpha: f64,
    pub eeg_beta: f64,
    pub eeg_gamma: f64,
    pub eeg_theta: f64,
    pub eeg_delta: f64,
    pub heart_rate: f64,
    pub gsr: f64,
    pub skin_temp: f64,
    pub activity_level: f64,
    pub sleep_quality: f64,
    pub hour_of_day: i64,
    pub day_of_week: i64,
    pub user_id: i64,
    pub age: i64,
    pub gender: i64,
    pub time_of_day: i64,
    pub activity_type: i64,
}

impl FeatureVector {
    /// Builds the vector from a profile, the samples in the lookback
    /// window, and the request wall-clock time.
    ///
    /// When several samples of one kind are present, the first occurrence
    /// in `samples` wins. Readers return samples most-recent-first, so in
    /// practice the pick is the latest one, but callers supplying their
    /// own ordering get first-seen semantics.
    pub fn from_samples(
        profile: &UserProfile,
        samples: &[MetricSample],
        at: DateTime<Utc>,
    ) -> Self {
        let mut latest: HashMap<MetricKind, f64> = HashMap::new();
        for sample in samples {
            latest.entry(sample.kind()).or_insert_with(|| sample.value());
        }

        let heart_rate = latest
            .get(&MetricKind::HeartRate)
            .copied()
            .unwrap_or(defaults::HEART_RATE);
        let activity_level = latest
            .get(&MetricKind::Steps)
            .map(|steps| steps / defaults::STEPS_PER_ACTIVITY_UNIT)
            .unwrap_or(defaults::ACTIVITY_LEVEL);
        let sleep_quality = latest
            .get(&MetricKind::SleepHours)
            .copied()
            .unwrap_or(defaults::SLEEP_QUALITY);
        let skin_temp = latest
            .get(&MetricKind::Temperature)
            .copied()
            .unwrap_or(defaults::SKIN_TEMP);

        Self {
            eeg_alpha: defaults::EEG_ALPHA,
            eeg_beta: defaults::EEG_BETA,
            eeg_gamma: defaults::EEG_GAMMA,
            eeg_theta: defaults::EEG_THETA,
            eeg_delta: defaults::EEG_DELTA,
            heart_rate,
            gsr: defaults::GSR,
            skin_temp,
            activity_level,
            sleep_quality,
            hour_of_day: at.hour() as i64,
            day_of_week: at.weekday().number_from_monday() as i64,
            user_id: profile.id().as_i64(),
            age: profile.age() as i64,
            gender: profile.encoded_gender(),
            time_of_day: time_of_day_bucket(at.hour()),
            activity_type: defaults::ACTIVITY_TYPE,
        }
    }
}

/// Six-hour bucket encoding: 0 night (00-05), 1 morning (06-11),
/// 2 afternoon (12-17), 3 evening (18-23).
fn time_of_day_bucket(hour: u32) -> i64 {
    (hour / 6) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{FirebaseUid, UserId};
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn test_profile() -> UserProfile {
        UserProfile::new(
            UserId::new(17),
            FirebaseUid::new("fb-17").unwrap(),
            34,
            "female",
            Utc::now(),
        )
        .unwrap()
    }

    fn sample(kind: MetricKind, value: f64) -> MetricSample {
        MetricSample::new(UserId::new(17), kind, value, Utc::now(), None)
    }

    #[test]
    fn empty_samples_use_documented_defaults() {
        let v = FeatureVector::from_samples(&test_profile(), &[], Utc::now());

        assert_eq!(v.heart_rate, 75.0);
        assert_eq!(v.activity_level, 5.0);
        assert_eq!(v.sleep_quality, 7.0);
        assert_eq!(v.skin_temp, 37.0);
        assert_eq!(v.eeg_alpha, 8.5);
        assert_eq!(v.eeg_beta, 15.0);
        assert_eq!(v.eeg_gamma, 30.0);
        assert_eq!(v.eeg_theta, 6.0);
        assert_eq!(v.eeg_delta, 2.0);
        assert_eq!(v.gsr, 5.0);
        assert_eq!(v.activity_type, 2);
    }

    #[test]
    fn steps_are_scaled_to_activity_level() {
        let samples = [sample(MetricKind::Steps, 8000.0)];
        let v = FeatureVector::from_samples(&test_profile(), &samples, Utc::now());
        assert_eq!(v.activity_level, 8.0);
    }

    #[test]
    fn present_metrics_override_defaults() {
        let samples = [
            sample(MetricKind::HeartRate, 92.0),
            sample(MetricKind::Temperature, 36.4),
            sample(MetricKind::SleepHours, 5.5),
        ];
        let v = FeatureVector::from_samples(&test_profile(), &samples, Utc::now());
        assert_eq!(v.heart_rate, 92.0);
        assert_eq!(v.skin_temp, 36.4);
        assert_eq!(v.sleep_quality, 5.5);
        // Steps absent, so activity level stays defaulted.
        assert_eq!(v.activity_level, 5.0);
    }

    #[test]
    fn first_seen_sample_wins_on_duplicates() {
        let samples = [
            sample(MetricKind::HeartRate, 88.0),
            sample(MetricKind::HeartRate, 120.0),
        ];
        let v = FeatureVector::from_samples(&test_profile(), &samples, Utc::now());
        assert_eq!(v.heart_rate, 88.0);
    }

    #[test]
    fn profile_fields_are_copied_in() {
        let v = FeatureVector::from_samples(&test_profile(), &[], Utc::now());
        assert_eq!(v.user_id, 17);
        assert_eq!(v.age, 34);
        assert_eq!(v.gender, 0);
    }

    #[test]
    fn clock_fields_come_from_request_time() {
        // Wednesday 2024-03-13 14:30 UTC.
        let at = Utc.with_ymd_and_hms(2024, 3, 13, 14, 30, 0).unwrap();
        let v = FeatureVector::from_samples(&test_profile(), &[], at);
        assert_eq!(v.hour_of_day, 14);
        assert_eq!(v.day_of_week, 3);
        assert_eq!(v.time_of_day, 2);
    }

    #[test]
    fn time_of_day_buckets() {
        assert_eq!(time_of_day_bucket(0), 0);
        assert_eq!(time_of_day_bucket(5), 0);
        assert_eq!(time_of_day_bucket(6), 1);
        assert_eq!(time_of_day_bucket(11), 1);
        assert_eq!(time_of_day_bucket(12), 2);
        assert_eq!(time_of_day_bucket(17), 2);
        assert_eq!(time_of_day_bucket(18), 3);
        assert_eq!(time_of_day_bucket(23), 3);
    }

    #[test]
    fn serializes_with_expected_field_names() {
        let v = FeatureVector::from_samples(&test_profile(), &[], Utc::now());
        let json = serde_json::to_value(&v).unwrap();
        let obj = json.as_object().unwrap();

        for field in [
            "eegAlpha",
            "eegBeta",
            "eegGamma",
            "eegTheta",
            "eegDelta",
            "heartRate",
            "gsr",
            "skinTemp",
            "activityLevel",
            "sleepQuality",
            "hourOfDay",
            "dayOfWeek",
            "userId",
            "age",
            "gender",
            "timeOfDay",
            "activityType",
        ] {
            assert!(obj.contains_key(field), "missing field {}", field);
        }
        assert_eq!(obj.len(), 17);
    }

    proptest! {
        /// Defaulting law: for any sample set omitting a given kind, the
        /// corresponding field equals its documented default exactly.
        #[test]
        fn absent_kinds_always_default(
            values in proptest::collection::vec(
                (0usize..4, 0.0f64..10_000.0),
                0..8,
            )
        ) {
            // Index 0..4 maps onto the four metric-sourced fields; a kind
            // not drawn simply never appears in the sample set.
            let kinds = [
                MetricKind::HeartRate,
                MetricKind::Steps,
                MetricKind::SleepHours,
                MetricKind::Temperature,
            ];
            let samples: Vec<MetricSample> = values
                .iter()
                .map(|(i, v)| sample(kinds[*i], *v))
                .collect();
            let present: Vec<MetricKind> = samples.iter().map(|s| s.kind()).collect();

            let v = FeatureVector::from_samples(&test_profile(), &samples, Utc::now());

            if !present.contains(&MetricKind::HeartRate) {
                prop_assert_eq!(v.heart_rate, defaults::HEART_RATE);
            }
            if !present.contains(&MetricKind::Steps) {
                prop_assert_eq!(v.activity_level, defaults::ACTIVITY_LEVEL);
            }
            if !present.contains(&MetricKind::SleepHours) {
                prop_assert_eq!(v.sleep_quality, defaults::SLEEP_QUALITY);
            }
            if !present.contains(&MetricKind::Temperature) {
                prop_assert_eq!(v.skin_temp, defaults::SKIN_TEMP);
            }
            // Signals with no source are fixed no matter the input.
            prop_assert_eq!(v.gsr, defaults::GSR);
            prop_assert_eq!(v.eeg_alpha, defaults::EEG_ALPHA);
            prop_assert_eq!(v.activity_type, defaults::ACTIVITY_TYPE);
        }
    }
}
