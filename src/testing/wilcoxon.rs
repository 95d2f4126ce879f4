//! Wilcoxon signed-rank test.
//!
//! Non-parametric alternative to the paired t-test: H₀ is that the
//! differences are symmetric about zero.
//!
//! # Algorithm
//!
//! 1. dᵢ = yᵢ − xᵢ; zero differences are dropped, leaving n_z
//! 2. Rank |dᵢ| (average ranks for ties)
//! 3. W⁺ = Σ ranks with dᵢ > 0, W⁻ = n_z(n_z+1)/2 − W⁺, W = min(W⁺, W⁻)
//! 4. Exact: enumerate all 2^n_z sign assignments of the ranks
//! 5. Approximate: z = (W − n_z(n_z+1)/4 − δ) / σ,
//!    σ² = n_z(n_z+1)(2n_z+1)/24 − Σ(t³−t)/48

use tracing::{debug, trace, warn};

use crate::combinatorics::SignAssignments;
use crate::error::{degenerate, ensure_finite, ensure_same_len, Result};
use crate::rank::rank_by;

use super::tails::{approximate_p_value, Tally};
use super::{Alternative, Method, RankTestOptions, TestResult, EXACT_SIZE_THRESHOLD};

/// Chooses the null-distribution path for `n` pairs, of which `zeros` have
/// a zero difference, given the tie statistic of the absolute differences.
///
/// Any tie, any zero difference, or more than [`EXACT_SIZE_THRESHOLD`]
/// pairs selects the normal approximation.
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{wilcoxon, Method};
///
/// assert_eq!(wilcoxon::select_method(12, 0, 0.0), Method::Exact);
/// assert_eq!(wilcoxon::select_method(12, 1, 0.0), Method::Approximate);
/// assert_eq!(wilcoxon::select_method(30, 0, 0.0), Method::Approximate);
/// ```
pub fn select_method(n: usize, zeros: usize, tie_correction: f64) -> Method {
    if tie_correction != 0.0 || zeros > 0 || n > EXACT_SIZE_THRESHOLD {
        Method::Approximate
    } else {
        Method::Exact
    }
}

/// Wilcoxon signed-rank test on paired samples.
///
/// The statistic is W = min(W⁺, W⁻) computed on the differences `y − x`.
///
/// # Errors
///
/// - `DimensionMismatch` if the samples differ in length.
/// - `InvalidArgument` if the samples are empty or hold non-finite values.
/// - `DegenerateInput` if every difference is zero.
///
/// # Panics
///
/// If W⁺ + W⁻ ≠ n_z(n_z+1)/2, which indicates a ranking defect.
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{wilcoxon, RankTestOptions};
///
/// let before = [5.0, 6.0, 7.0, 8.0, 9.0];
/// let after  = [6.0, 7.5, 8.25, 9.125, 10.0625];
/// let r = wilcoxon::two_sample_paired(&before, &after, RankTestOptions::default()).unwrap();
/// assert_eq!(r.statistic, 0.0); // every difference is positive
/// assert!((r.p_value - 0.0625).abs() < 1e-12); // 2 of 32 sign patterns
/// ```
pub fn two_sample_paired(x: &[f64], y: &[f64], options: RankTestOptions) -> Result<TestResult> {
    ensure_same_len(x, y)?;
    ensure_finite(x, "first sample")?;
    ensure_finite(y, "second sample")?;

    let n = x.len();
    let diffs: Vec<f64> = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| b - a)
        .filter(|&d| d != 0.0)
        .collect();
    let nz = diffs.len();
    if nz == 0 {
        return Err(degenerate("all paired differences are zero"));
    }
    let nzf = nz as f64;

    let ranking = rank_by(&diffs, |a, b| a.abs().total_cmp(&b.abs()));
    let tie_correction = ranking.tie_correction;

    let (w_plus, w_minus) = diffs
        .iter()
        .zip(ranking.ranks.iter())
        .fold((0.0, 0.0), |(plus, minus), (&d, &r)| {
            if d > 0.0 {
                (plus + r, minus)
            } else {
                (plus, minus + r)
            }
        });
    let total = nzf * (nzf + 1.0) / 2.0;
    assert!(
        (w_plus + w_minus - total).abs() < 1e-6,
        "W+ + W- = {} but nz(nz+1)/2 = {total}",
        w_plus + w_minus
    );
    let w = w_plus.min(w_minus);

    let selected = select_method(n, n - nz, tie_correction);
    let method = options.method.unwrap_or(selected);
    debug!(
        n,
        nz,
        tie_correction,
        ?method,
        forced = options.method.is_some(),
        "wilcoxon null distribution"
    );
    if method == Method::Exact && selected == Method::Approximate {
        warn!(nz, "exact enumeration forced beyond the automatic threshold");
    }

    let p_value = match method {
        Method::Exact => exact_p_value(&ranking.ranks, w, options.alternative),
        Method::Approximate => {
            let mean = nzf * (nzf + 1.0) / 4.0;
            let variance = nzf * (nzf + 1.0) * (2.0 * nzf + 1.0) / 24.0 - tie_correction / 48.0;
            approximate_p_value(w, mean, variance, options.alternative, options.correction)?
        }
    };
    trace!(w_plus, w_minus, p_value, "wilcoxon");

    Ok(TestResult {
        statistic: w,
        p_value,
    })
}

/// One-sample signed-rank test of `data` against a location `shift`.
///
/// Equivalent to [`two_sample_paired`] with `x = [shift; n]` and
/// `y = data`, so the differences are `dataᵢ − shift`.
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{wilcoxon, RankTestOptions};
///
/// let data = [10.3, 10.9, 11.4, 12.2, 12.8, 13.1];
/// let r = wilcoxon::one_sample(&data, 10.0, RankTestOptions::default()).unwrap();
/// assert!(r.p_value < 0.05);
/// ```
pub fn one_sample(data: &[f64], shift: f64, options: RankTestOptions) -> Result<TestResult> {
    let baseline = vec![shift; data.len()];
    two_sample_paired(&baseline, data, options)
}

// Distribution of the positive-rank sum over all 2^nz sign patterns.
fn exact_p_value(ranks: &[f64], w: f64, alternative: Alternative) -> f64 {
    SignAssignments::new(ranks.len())
        .map(|signs| {
            signs
                .iter()
                .zip(ranks.iter())
                .filter(|&(&positive, _)| positive)
                .map(|(_, &r)| r)
                .sum::<f64>()
        })
        .fold(Tally::default(), |tally, s| tally.record(s, w))
        .p_value(alternative)
}
