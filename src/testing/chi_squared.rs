//! Pearson chi-squared tests on counts.
//!
//! # References
//!
//! - Pearson (1900). "On the criterion that a given system of deviations
//!   from the probable in the case of a correlated system of variables is
//!   such that it can be reasonably supposed to have arisen from random
//!   sampling". Philosophical Magazine, 50(302), 157–175.
//! - Yates (1934). "Contingency tables involving small numbers and the χ²
//!   test". Supplement to JRSS, 1(2), 217–235.

use tracing::trace;

use crate::distribution::Distribution;
use crate::error::{degenerate, ensure_finite, invalid, Result, TestError};

use super::TestResult;

/// Options for [`goodness_of_fit`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GoodnessOfFitOptions<'a> {
    /// Expected frequencies, one per category. `None` (default) means a
    /// uniform distribution of the observed total.
    pub expected: Option<&'a [f64]>,
    /// Degrees of freedom to subtract for parameters estimated from the
    /// data. Default: `0`.
    pub extra_df: usize,
}

/// Options for [`independence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndependenceOptions {
    /// Apply Yates' continuity correction when df = 1. Default: `true`.
    pub correction: bool,
}

impl Default for IndependenceOptions {
    fn default() -> Self {
        Self { correction: true }
    }
}

/// Chi-squared goodness-of-fit test: H₀: observed counts follow the
/// expected frequencies.
///
/// # Algorithm
///
/// χ² = Σ (Oᵢ − Eᵢ)² / Eᵢ, df = k − 1 − `extra_df`.
///
/// # Errors
///
/// - `DimensionMismatch` if `expected` and `observed` differ in length.
/// - `InvalidArgument` for empty input, negative or non-finite counts,
///   non-positive expected frequencies, or df < 1.
/// - `DegenerateInput` if the default uniform expectation is zero (all
///   counts zero).
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{chi_squared, GoodnessOfFitOptions};
///
/// let observed = [50.0, 30.0, 20.0];
/// let r = chi_squared::goodness_of_fit(&observed, GoodnessOfFitOptions::default()).unwrap();
/// assert!((r.statistic - 14.0).abs() < 1e-9);
/// assert!(r.p_value < 0.001);
/// ```
pub fn goodness_of_fit(observed: &[f64], options: GoodnessOfFitOptions<'_>) -> Result<TestResult> {
    ensure_finite(observed, "observed counts")?;
    if observed.iter().any(|&o| o < 0.0) {
        return Err(invalid("observed counts must be non-negative"));
    }
    let k = observed.len();

    let expected: Vec<f64> = match options.expected {
        Some(e) => {
            if e.len() != k {
                return Err(TestError::DimensionMismatch {
                    expected: k,
                    actual: e.len(),
                });
            }
            if e.iter().any(|&v| !v.is_finite() || v <= 0.0) {
                return Err(invalid("expected frequencies must be positive and finite"));
            }
            e.to_vec()
        }
        None => {
            let total: f64 = observed.iter().sum();
            if total <= 0.0 {
                return Err(degenerate("uniform expectation of an all-zero sample"));
            }
            vec![total / k as f64; k]
        }
    };

    if k < 2 + options.extra_df {
        return Err(invalid(format!(
            "{k} categories leave no degrees of freedom after {} estimated parameters",
            options.extra_df
        )));
    }
    let df = (k - 1 - options.extra_df) as f64;

    let chi2: f64 = observed
        .iter()
        .zip(expected.iter())
        .map(|(&o, &e)| (o - e).powi(2) / e)
        .sum();

    Ok(finalize(chi2, df))
}

/// Chi-squared test of independence on a contingency table.
///
/// # Arguments
///
/// * `table` — Flat row-major contingency table (rows × cols observed frequencies).
/// * `n_rows` — Number of rows, ≥ 1.
/// * `n_cols` — Number of columns, ≥ 1.
///
/// # Algorithm
///
/// Eᵢⱼ = rowᵢ · colⱼ / N, df = (r − 1)(c − 1).
/// χ² = Σᵢⱼ (Eᵢⱼ − Oᵢⱼ)² / Eᵢⱼ, or with Yates' correction (df = 1 only)
/// Σᵢⱼ (|Eᵢⱼ − Oᵢⱼ| − 0.5)² / Eᵢⱼ.
///
/// A single row or column (df = 0) cannot be tested and returns
/// `statistic = 0`, `p_value = 1`.
///
/// # Errors
///
/// - `DimensionMismatch` if `table.len() != n_rows * n_cols`.
/// - `InvalidArgument` for zero rows or columns and negative or non-finite
///   counts.
/// - `DegenerateInput` if any expected frequency is zero.
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{chi_squared, IndependenceOptions};
///
/// // 2×2 contingency table
/// let table = [30.0, 10.0, 10.0, 50.0];
/// let r = chi_squared::independence(&table, 2, 2, IndependenceOptions::default()).unwrap();
/// assert!(r.p_value < 0.001);
/// ```
pub fn independence(
    table: &[f64],
    n_rows: usize,
    n_cols: usize,
    options: IndependenceOptions,
) -> Result<TestResult> {
    if n_rows == 0 || n_cols == 0 {
        return Err(invalid("contingency table needs at least one row and one column"));
    }
    // an overflowing shape can never match a real slice
    let cells = n_rows.checked_mul(n_cols);
    if cells != Some(table.len()) {
        return Err(TestError::DimensionMismatch {
            expected: cells.unwrap_or(usize::MAX),
            actual: table.len(),
        });
    }
    if table.iter().any(|&v| !v.is_finite() || v < 0.0) {
        return Err(invalid("contingency table counts must be non-negative and finite"));
    }

    let df = (n_rows - 1) * (n_cols - 1);
    if df == 0 {
        return Ok(TestResult {
            statistic: 0.0,
            p_value: 1.0,
        });
    }

    let mut row_sums = vec![0.0; n_rows];
    let mut col_sums = vec![0.0; n_cols];
    for (idx, &v) in table.iter().enumerate() {
        row_sums[idx / n_cols] += v;
        col_sums[idx % n_cols] += v;
    }
    let total: f64 = row_sums.iter().sum();
    if total <= 0.0 {
        return Err(degenerate("contingency table is empty"));
    }

    let yates = options.correction && df == 1;
    let mut chi2 = 0.0;
    for (idx, &observed) in table.iter().enumerate() {
        let expected = row_sums[idx / n_cols] * col_sums[idx % n_cols] / total;
        if expected == 0.0 {
            return Err(degenerate(format!(
                "zero expected frequency at row {}, column {}",
                idx / n_cols,
                idx % n_cols
            )));
        }
        let dev = if yates {
            (expected - observed).abs() - 0.5
        } else {
            expected - observed
        };
        chi2 += dev * dev / expected;
    }

    Ok(finalize(chi2, df as f64))
}

fn finalize(chi2: f64, df: f64) -> TestResult {
    let p_value = (1.0 - Distribution::ChiSquared { df }.cumulative_probability(chi2)).clamp(0.0, 1.0);
    trace!(chi2, df, p_value, "chi-squared test");
    TestResult {
        statistic: chi2,
        p_value,
    }
}
