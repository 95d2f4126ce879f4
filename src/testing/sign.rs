//! Sign test for paired samples.
//!
//! Counts the positive and negative differences `y − x` (zeros are
//! ignored) and compares the positive count π⁺ against
//! Binomial(π⁺ + π⁻, ½).
//!
//! The tails use the discrete binomial definitions
//! `P(X ≤ π⁺)` and `P(X ≥ π⁺) = 1 − P(X ≤ π⁺ − 1)`; the two-sided p-value
//! doubles the smaller of the two.

use tracing::trace;

use crate::distribution::Distribution;
use crate::error::{ensure_finite, ensure_same_len, Result};

use super::{Alternative, TestResult};

/// Sign test on paired samples; the statistic is π⁺, the number of pairs
/// with `y > x`.
///
/// # Errors
///
/// - `DimensionMismatch` if the samples differ in length.
/// - `InvalidArgument` if the samples are empty or hold non-finite values.
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{sign, Alternative};
///
/// let x = [11.0, 1.0, -1.0, 2.0, 0.0];
/// let y = [-5.0, 9.0, 5.0, 8.0, 4.0];
/// let r = sign::two_sample_paired(&x, &y, Alternative::TwoSided).unwrap();
/// assert_eq!(r.statistic, 4.0); // differences [-16, 8, 6, 6, 4]
/// assert!((r.p_value - 0.375).abs() < 1e-9);
/// ```
pub fn two_sample_paired(x: &[f64], y: &[f64], alternative: Alternative) -> Result<TestResult> {
    ensure_same_len(x, y)?;
    ensure_finite(x, "first sample")?;
    ensure_finite(y, "second sample")?;

    let (plus, minus) = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| b - a)
        .fold((0_u64, 0_u64), |(plus, minus), d| {
            if d > 0.0 {
                (plus + 1, minus)
            } else if d < 0.0 {
                (plus, minus + 1)
            } else {
                (plus, minus)
            }
        });

    let dist = Distribution::Binomial {
        trials: plus + minus,
        p: 0.5,
    };
    let k = plus as f64;
    let lower = dist.cumulative_probability(k);
    let upper = 1.0 - dist.cumulative_probability(k - 1.0);
    let p_value = match alternative {
        Alternative::Less => lower,
        Alternative::Greater => upper,
        Alternative::TwoSided => 2.0 * lower.min(upper),
    }
    .clamp(0.0, 1.0);
    trace!(plus, minus, p_value, "sign test");

    Ok(TestResult {
        statistic: k,
        p_value,
    })
}

/// One-sample sign test of `data` against a location `shift`; π⁺ counts
/// observations above `shift`.
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{sign, Alternative};
///
/// let data = [1.2, 0.8, 1.9, 2.4, 1.1, 1.7, 0.9, 2.2];
/// let r = sign::one_sample(&data, 0.5, Alternative::Greater).unwrap();
/// assert_eq!(r.statistic, 8.0);
/// assert!((r.p_value - 1.0 / 256.0).abs() < 1e-9);
/// ```
pub fn one_sample(data: &[f64], shift: f64, alternative: Alternative) -> Result<TestResult> {
    let baseline = vec![shift; data.len()];
    two_sample_paired(&baseline, data, alternative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TestError;

    const X: [f64; 5] = [11.0, 1.0, -1.0, 2.0, 0.0];
    const Y: [f64; 5] = [-5.0, 9.0, 5.0, 8.0, 4.0];

    #[test]
    fn paired_scenario() {
        // π⁺ = 4 of 5: P(X ≤ 4) = 31/32, P(X ≥ 4) = 6/32
        let less = two_sample_paired(&X, &Y, Alternative::Less).expect("should compute");
        let greater = two_sample_paired(&X, &Y, Alternative::Greater).expect("should compute");
        let two = two_sample_paired(&X, &Y, Alternative::TwoSided).expect("should compute");
        assert_eq!(two.statistic, 4.0);
        assert!((less.p_value - 31.0 / 32.0).abs() < 1e-9, "p = {}", less.p_value);
        assert!((greater.p_value - 6.0 / 32.0).abs() < 1e-9, "p = {}", greater.p_value);
        assert!((two.p_value - 12.0 / 32.0).abs() < 1e-9, "p = {}", two.p_value);
    }

    #[test]
    fn reversed_pairs_mirror() {
        let r = two_sample_paired(&Y, &X, Alternative::Less).expect("should compute");
        assert_eq!(r.statistic, 1.0);
        assert!((r.p_value - 6.0 / 32.0).abs() < 1e-9, "p = {}", r.p_value);
    }

    #[test]
    fn two_sided_clamped_at_one() {
        // π⁺ = 2 of 4: both tails are 11/16
        let x = [0.0; 4];
        let y = [1.0, 2.0, -1.0, -2.0];
        let r = two_sample_paired(&x, &y, Alternative::TwoSided).expect("should compute");
        assert_eq!(r.p_value, 1.0);
    }

    #[test]
    fn zeros_ignored() {
        let with_zeros = one_sample(&[1.0, 2.0, 0.0, 0.0, 3.0], 0.0, Alternative::Greater)
            .expect("should compute");
        let without = one_sample(&[1.0, 2.0, 3.0], 0.0, Alternative::Greater)
            .expect("should compute");
        assert_eq!(with_zeros, without);
        assert!((without.p_value - 0.125).abs() < 1e-9);
    }

    #[test]
    fn all_zero_differences() {
        let r = one_sample(&[2.0, 2.0, 2.0], 2.0, Alternative::TwoSided).expect("should compute");
        assert_eq!(r.statistic, 0.0);
        assert_eq!(r.p_value, 1.0);
    }

    #[test]
    fn errors() {
        assert_eq!(
            two_sample_paired(&[1.0, 2.0], &[3.0], Alternative::TwoSided),
            Err(TestError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert!(matches!(
            two_sample_paired(&[], &[], Alternative::TwoSided),
            Err(TestError::InvalidArgument(_))
        ));
        assert!(matches!(
            one_sample(&[1.0, f64::INFINITY], 0.0, Alternative::TwoSided),
            Err(TestError::InvalidArgument(_))
        ));
    }
}
