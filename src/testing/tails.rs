// Tail probabilities shared by the rank tests: continuity correction,
// normal-approximation p-values and exact-enumeration tallies.

use crate::distribution::Distribution;
use crate::error::{degenerate, Result};

use super::Alternative;

// Rank sums are multiples of 0.5; this only absorbs summation noise.
const TALLY_EPS: f64 = 1e-9;

/// ±0.5 shift toward the center of the null distribution.
pub(crate) fn continuity_delta(
    alternative: Alternative,
    statistic: f64,
    mean: f64,
    correction: bool,
) -> f64 {
    if !correction {
        return 0.0;
    }
    match alternative {
        Alternative::Greater => 0.5,
        Alternative::Less => -0.5,
        Alternative::TwoSided => {
            if statistic > mean {
                0.5
            } else if statistic < mean {
                -0.5
            } else {
                0.0
            }
        }
    }
}

/// p-value of a standard normal score.
pub(crate) fn normal_p_value(z: f64, alternative: Alternative) -> f64 {
    let lower = Distribution::StandardNormal.cumulative_probability(z);
    let p = match alternative {
        Alternative::Less => lower,
        Alternative::Greater => 1.0 - lower,
        Alternative::TwoSided => 2.0 * lower.min(1.0 - lower),
    };
    p.clamp(0.0, 1.0)
}

/// Normal approximation of a discrete rank statistic.
pub(crate) fn approximate_p_value(
    statistic: f64,
    mean: f64,
    variance: f64,
    alternative: Alternative,
    correction: bool,
) -> Result<f64> {
    if variance.is_nan() || variance <= 0.0 {
        return Err(degenerate(
            "null variance of the rank statistic is zero (all observations tied)",
        ));
    }
    let delta = continuity_delta(alternative, statistic, mean, correction);
    let z = (statistic - mean - delta) / variance.sqrt();
    Ok(normal_p_value(z, alternative))
}

/// Counts of enumerated null statistics at or below / above the observed one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub(crate) le: u64,
    pub(crate) gt: u64,
}

impl Tally {
    pub(crate) fn record(self, value: f64, observed: f64) -> Self {
        if value <= observed + TALLY_EPS {
            Self {
                le: self.le + 1,
                ..self
            }
        } else {
            Self {
                gt: self.gt + 1,
                ..self
            }
        }
    }

    pub(crate) fn total(&self) -> u64 {
        self.le + self.gt
    }

    pub(crate) fn p_value(&self, alternative: Alternative) -> f64 {
        let total = self.total() as f64;
        let p = match alternative {
            Alternative::Less => self.le as f64 / total,
            Alternative::Greater => self.gt as f64 / total,
            Alternative::TwoSided => 2.0 * self.le.min(self.gt) as f64 / total,
        };
        p.min(1.0)
    }
}
