//! Mann-Whitney U (Wilcoxon rank-sum) test.
//!
//! Non-parametric alternative to the two-sample t-test: H₀ is that both
//! samples come from the same distribution.
//!
//! # Algorithm
//!
//! 1. Concatenate the samples and rank them jointly (average ranks for ties)
//! 2. Uᵢ = Wᵢ − nᵢ(nᵢ+1)/2 where Wᵢ is the rank sum of sample i,
//!    reported U = min(U₁, U₂)
//! 3. Small tie-free samples: enumerate every way of drawing the smaller
//!    group's ranks from the pooled ranks ([`Method::Exact`])
//! 4. Otherwise: z = (U − n₁n₂/2 − δ) / σ with tie-corrected σ and
//!    continuity correction δ ([`Method::Approximate`])

use tracing::{debug, trace, warn};

use crate::combinatorics::Combinations;
use crate::error::{ensure_finite, Result};
use crate::rank::rank;

use super::tails::{approximate_p_value, Tally};
use super::{Alternative, Method, RankTestOptions, TestResult, EXACT_SIZE_THRESHOLD};

/// Chooses the null-distribution path for sample sizes `n1`, `n2` and the
/// tie statistic of the pooled ranking.
///
/// Ties, or both samples larger than [`EXACT_SIZE_THRESHOLD`], select the
/// normal approximation.
///
/// A single small sample is enough for [`Method::Exact`], however large the
/// other one is. The enumeration then visits `C(n₁ + n₂, min(n₁, n₂))`
/// subsets with no upper bound (n₁ = 5, n₂ = 10 000 is about 8·10¹⁷), so
/// callers with one very large group should force [`Method::Approximate`].
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{mann_whitney, Method};
///
/// assert_eq!(mann_whitney::select_method(8, 30, 0.0), Method::Exact);
/// assert_eq!(mann_whitney::select_method(21, 21, 0.0), Method::Approximate);
/// assert_eq!(mann_whitney::select_method(3, 3, 6.0), Method::Approximate);
/// ```
pub fn select_method(n1: usize, n2: usize, tie_correction: f64) -> Method {
    if tie_correction != 0.0 || (n1 > EXACT_SIZE_THRESHOLD && n2 > EXACT_SIZE_THRESHOLD) {
        Method::Approximate
    } else {
        Method::Exact
    }
}

/// Mann-Whitney U test on two independent samples.
///
/// The statistic is U = min(U₁, U₂).
///
/// # Errors
///
/// - `InvalidArgument` if either sample is empty or holds non-finite values.
/// - `DegenerateInput` on the approximate path when every observation is
///   tied.
///
/// # Panics
///
/// If U₁ + U₂ ≠ n₁n₂, which indicates a ranking defect.
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{mann_whitney, RankTestOptions};
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let r = mann_whitney::two_sample(&a, &b, RankTestOptions::default()).unwrap();
/// assert_eq!(r.statistic, 0.0);
/// assert!((r.p_value - 0.1).abs() < 1e-12); // 2 of 20 arrangements
/// ```
pub fn two_sample(a: &[f64], b: &[f64], options: RankTestOptions) -> Result<TestResult> {
    ensure_finite(a, "first sample")?;
    ensure_finite(b, "second sample")?;

    let n1 = a.len();
    let n2 = b.len();
    let n1f = n1 as f64;
    let n2f = n2 as f64;
    let nf = (n1 + n2) as f64;

    let combined: Vec<f64> = a.iter().chain(b.iter()).copied().collect();
    let ranking = rank(&combined);
    let tie_correction = ranking.tie_correction;

    let w1: f64 = ranking.ranks[..n1].iter().sum();
    let w2: f64 = ranking.ranks[n1..].iter().sum();
    let u1 = w1 - n1f * (n1f + 1.0) / 2.0;
    let u2 = w2 - n2f * (n2f + 1.0) / 2.0;
    assert!(
        (u1 + u2 - n1f * n2f).abs() < 1e-6,
        "U1 + U2 = {} but n1 * n2 = {}",
        u1 + u2,
        n1f * n2f
    );
    let u = u1.min(u2);

    let selected = select_method(n1, n2, tie_correction);
    let method = options.method.unwrap_or(selected);
    debug!(
        n1,
        n2,
        tie_correction,
        ?method,
        forced = options.method.is_some(),
        "mann-whitney null distribution"
    );
    if method == Method::Exact && selected == Method::Approximate {
        warn!(n1, n2, "exact enumeration forced beyond the automatic threshold");
    }

    let p_value = match method {
        Method::Exact => exact_p_value(&ranking.ranks, n1.min(n2), u, options.alternative),
        Method::Approximate => {
            let mean = n1f * n2f / 2.0;
            let variance = n1f * n2f / 12.0 * ((nf + 1.0) - tie_correction / (nf * (nf - 1.0)));
            approximate_p_value(u, mean, variance, options.alternative, options.correction)?
        }
    };
    trace!(u, p_value, "mann-whitney");

    Ok(TestResult {
        statistic: u,
        p_value,
    })
}

// Distribution of U over all C(n, k) placements of the smaller group.
fn exact_p_value(ranks: &[f64], k: usize, u: f64, alternative: Alternative) -> f64 {
    let offset = (k * (k + 1)) as f64 / 2.0;
    Combinations::new(ranks.len(), k)
        .map(|subset| subset.iter().map(|&i| ranks[i]).sum::<f64>() - offset)
        .fold(Tally::default(), |tally, cu| tally.record(cu, u))
        .p_value(alternative)
}
