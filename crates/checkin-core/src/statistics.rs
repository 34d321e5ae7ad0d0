//! Aggregate statistics over submissions.
//!
//! Averages are rounded to two decimals with round-half-away-from-zero.
//! Rounding is done on the integer rating sums, so ties such as `1.125`
//! always resolve upward to `1.13` instead of depending on how the mean
//! happens to be represented as a float.

use serde::Serialize;

use crate::model::{Metric, Submission};

/// Count and per-metric averages over a set of submissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Number of submissions aggregated.
    pub count: usize,
    /// Per-metric means, rounded to two decimals (0 when `count` is 0).
    pub averages: Averages,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Averages {
    pub motivation: f64,
    pub energy: f64,
    pub happiness: f64,
}

/// Compute count and rounded averages. Empty input yields all zeros.
pub fn compute_aggregates(records: &[Submission]) -> AggregateStats {
    let count = records.len();
    let mean = |metric: Metric| {
        let sum: u64 = records.iter().map(|r| u64::from(r.rating(metric))).sum();
        rounded_mean(sum, count as u64)
    };

    AggregateStats {
        count,
        averages: Averages {
            motivation: mean(Metric::Motivation),
            energy: mean(Metric::Energy),
            happiness: mean(Metric::Happiness),
        },
    }
}

/// `sum / n` rounded to two decimals, half away from zero. Returns 0 for `n == 0`.
pub fn rounded_mean(sum: u64, n: u64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    // floor((100 * sum / n) + 1/2) == floor((200 * sum + n) / (2 * n))
    let hundredths = (200 * sum + n) / (2 * n);
    hundredths as f64 / 100.0
}
