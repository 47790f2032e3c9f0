use serde::{Deserialize, Serialize};

/// How to combine a range when both bounds are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum EstimateMode {
    /// `(to - from) / 2`
    #[default]
    HalfRange,
    /// `(from + to) / 2`
    Midpoint,
}

fn known(bound: Option<u64>) -> Option<f64> {
    bound.filter(|value| *value != 0).map(|value| value as f64)
}

pub fn estimate(from: Option<u64>, to: Option<u64>) -> Option<f64> {
    estimate_with(EstimateMode::HalfRange, from, to)
}

pub fn estimate_with(mode: EstimateMode, from: Option<u64>, to: Option<u64>) -> Option<f64> {
    match (known(from), known(to)) {
        (None, None) => None,
        (None, Some(to)) => Some(to * 0.8),
        (Some(from), None) => Some(from * 1.2),
        (Some(from), Some(to)) => match mode {
            EstimateMode::HalfRange => Some((to - from) / 2.0),
            EstimateMode::Midpoint => Some((from + to) / 2.0),
        },
    }
}
