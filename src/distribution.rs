//! Null distributions used by the tests.
//!
//! A thin oracle over the special functions in `u-numflow`: every test asks
//! for `P(X ≤ x)` under one of four reference distributions and nothing
//! else.
//!
//! # Examples
//!
//! ```
//! use u_hypothesis::distribution::Distribution;
//!
//! let z = Distribution::StandardNormal;
//! assert!((z.cumulative_probability(1.96) - 0.975).abs() < 1e-3);
//!
//! let b = Distribution::Binomial { trials: 5, p: 0.5 };
//! assert!((b.cumulative_probability(4.0) - 31.0 / 32.0).abs() < 1e-9);
//! ```

use u_numflow::special;

/// A reference distribution with a cumulative distribution function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// N(0, 1).
    StandardNormal,
    /// Student's t with `df` degrees of freedom (may be fractional).
    StudentT {
        /// Degrees of freedom, > 0.
        df: f64,
    },
    /// χ² with `df` degrees of freedom.
    ChiSquared {
        /// Degrees of freedom, > 0.
        df: f64,
    },
    /// Number of successes in `trials` Bernoulli(`p`) draws.
    Binomial {
        /// Number of trials.
        trials: u64,
        /// Success probability in `[0, 1]`.
        p: f64,
    },
}

impl Distribution {
    /// `P(X ≤ x)`.
    ///
    /// For the binomial distribution `x` is floored, so `cumulative_probability(-1.0)`
    /// is `0` and any `x ≥ trials` gives `1`.
    pub fn cumulative_probability(&self, x: f64) -> f64 {
        match *self {
            Distribution::StandardNormal => special::standard_normal_cdf(x),
            Distribution::StudentT { df } => special::t_distribution_cdf(x, df),
            Distribution::ChiSquared { df } => special::chi_squared_cdf(x, df),
            Distribution::Binomial { trials, p } => binomial_cdf(x, trials, p),
        }
    }
}

// P(X ≤ k) = I_{1-p}(n - k, k + 1) for 0 ≤ k < n.
fn binomial_cdf(x: f64, trials: u64, p: f64) -> f64 {
    if x.is_nan() || p.is_nan() {
        return f64::NAN;
    }
    let k = x.floor();
    if k < 0.0 {
        return 0.0;
    }
    let n = trials as f64;
    if k >= n {
        return 1.0;
    }
    special::regularized_incomplete_beta(1.0 - p, n - k, k + 1.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_symmetry() {
        let z = Distribution::StandardNormal;
        assert!((z.cumulative_probability(0.0) - 0.5).abs() < 1e-7);
        let s = z.cumulative_probability(1.3) + z.cumulative_probability(-1.3);
        assert!((s - 1.0).abs() < 1e-7, "sum = {s}");
    }

    #[test]
    fn student_t_center() {
        let t = Distribution::StudentT { df: 4.0 };
        assert!((t.cumulative_probability(0.0) - 0.5).abs() < 1e-12);
        // t_{0.975, 10} = 2.228
        let t10 = Distribution::StudentT { df: 10.0 };
        assert!((t10.cumulative_probability(2.228) - 0.975).abs() < 1e-3);
    }

    #[test]
    fn chi_squared_critical_value() {
        let c = Distribution::ChiSquared { df: 1.0 };
        assert!((c.cumulative_probability(3.841) - 0.95).abs() < 1e-3);
        assert_eq!(c.cumulative_probability(0.0), 0.0);
    }

    #[test]
    fn binomial_exact_values() {
        let b = Distribution::Binomial { trials: 5, p: 0.5 };
        let expected = [1.0, 6.0, 16.0, 26.0, 31.0, 32.0];
        for (k, &num) in expected.iter().enumerate() {
            let cdf = b.cumulative_probability(k as f64);
            assert!(
                (cdf - num / 32.0).abs() < 1e-9,
                "CDF({k}) = {cdf}, expected {}",
                num / 32.0
            );
        }
    }

    #[test]
    fn binomial_out_of_support() {
        let b = Distribution::Binomial { trials: 3, p: 0.5 };
        assert_eq!(b.cumulative_probability(-1.0), 0.0);
        assert_eq!(b.cumulative_probability(3.0), 1.0);
        assert_eq!(b.cumulative_probability(10.0), 1.0);
        // between support points the CDF is flat
        let at_one = b.cumulative_probability(1.0);
        assert!((b.cumulative_probability(1.7) - at_one).abs() < 1e-15);
    }

    #[test]
    fn binomial_zero_trials() {
        let b = Distribution::Binomial { trials: 0, p: 0.5 };
        assert_eq!(b.cumulative_probability(0.0), 1.0);
        assert_eq!(b.cumulative_probability(-1.0), 0.0);
    }
}
