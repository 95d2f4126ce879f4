//! Hypothesis testing.
//!
//! Parametric and rank-based tests, each returning a statistic and a
//! p-value under a chosen alternative.
//!
//! # Tests
//!
//! - [`t_test`] — one-sample, two-sample (pooled or Welch) and paired t-tests
//! - [`chi_squared`] — goodness-of-fit and contingency-table independence
//! - [`mann_whitney`] — rank-sum test for two independent samples
//! - [`wilcoxon`] — signed-rank test for paired samples
//! - [`sign`] — binomial sign test for paired samples
//! - [`run_test`] — reduce a test outcome to a [`Verdict`]
//!
//! # Exact vs. approximate null distributions
//!
//! The rank tests enumerate the exact permutation distribution for small,
//! tie-free samples and fall back to a normal approximation otherwise. The
//! choice is a [`Method`] value that callers may also force through
//! [`RankTestOptions::method`].
//!
//! # Examples
//!
//! ```
//! use u_hypothesis::testing::{t_test, TTestOptions};
//!
//! let data = [5.1, 4.9, 5.2, 5.0, 4.8, 5.3, 5.1, 4.9];
//! let options = TTestOptions { mean: 5.0, ..Default::default() };
//! let result = t_test::one_sample(&data, options).unwrap();
//! assert!(result.p_value > 0.05); // cannot reject H₀: μ = 5.0
//! ```
//!
//! # References
//!
//! - Mann & Whitney (1947). "On a test of whether one of two random
//!   variables is stochastically larger than the other". Annals of
//!   Mathematical Statistics, 18(1), 50–60.
//! - Wilcoxon (1945). "Individual comparisons by ranking methods".
//!   Biometrics Bulletin, 1(6), 80–83.

pub mod chi_squared;
mod gate;
pub mod mann_whitney;
pub mod sign;
mod tails;
pub mod wilcoxon;

pub use chi_squared::{GoodnessOfFitOptions, IndependenceOptions};
pub use gate::{run_test, run_test_at, Verdict, DEFAULT_SIGNIFICANCE_LEVEL};
pub use t_test::TTestOptions;

/// Sample size above which the rank tests stop enumerating the exact null
/// distribution.
pub const EXACT_SIZE_THRESHOLD: usize = 20;

/// Result of a hypothesis test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    /// Test statistic (t, χ², U, W or π⁺ depending on the test).
    pub statistic: f64,
    /// p-value under the requested alternative, in `[0, 1]`.
    pub p_value: f64,
}

/// Direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// The statistic is stochastically smaller than under H₀ (lower tail).
    Less,
    /// The statistic is stochastically larger than under H₀ (upper tail).
    Greater,
    /// Either direction (both tails).
    #[default]
    TwoSided,
}

/// How the null distribution of a rank statistic is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Full enumeration of the permutation distribution.
    Exact,
    /// Normal approximation with tie-corrected variance.
    Approximate,
}

/// Options shared by the rank tests ([`mann_whitney`], [`wilcoxon`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankTestOptions {
    /// Alternative hypothesis. Default: [`Alternative::TwoSided`].
    pub alternative: Alternative,
    /// Apply the ±0.5 continuity correction on the approximate path.
    /// Default: `true`.
    pub correction: bool,
    /// Force a null-distribution path. `None` (default) lets the test
    /// choose from the data.
    ///
    /// Forcing [`Method::Exact`] on large samples is not guarded: the
    /// enumeration is `O(C(n, k))` for Mann-Whitney and `O(2ⁿ)` for
    /// Wilcoxon.
    pub method: Option<Method>,
}

impl Default for RankTestOptions {
    fn default() -> Self {
        Self {
            alternative: Alternative::TwoSided,
            correction: true,
            method: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_defaults() {
        let rank = RankTestOptions::default();
        assert_eq!(rank.alternative, Alternative::TwoSided);
        assert!(rank.correction);
        assert_eq!(rank.method, None);

        let t = TTestOptions::default();
        assert_eq!(t.mean, 0.0);
        assert!(t.equal_variance);
        assert!(IndependenceOptions::default().correction);
    }
}
