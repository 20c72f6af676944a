//! Health metrics domain module.

mod sample;

pub use sample::{lookback_since, MetricKind, MetricSample, LOOKBACK_HOURS};
