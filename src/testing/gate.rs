//! Reduce a test outcome to a binary verdict.

use crate::error::{invalid, Result};

use super::TestResult;

/// Threshold used by [`run_test`].
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Outcome of [`run_test`].
///
/// Note the polarity: a p-value at or below the threshold yields
/// [`Verdict::NotSignificant`]. Callers depend on this mapping as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// p-value above the significance level.
    Significant,
    /// p-value at or below the significance level.
    NotSignificant,
}

/// Runs `test` and compares its p-value with [`DEFAULT_SIGNIFICANCE_LEVEL`].
///
/// # Examples
///
/// ```
/// use u_hypothesis::testing::{run_test, t_test, TTestOptions, Verdict};
///
/// let v = run_test(|| t_test::one_sample(&[-1.0, 0.0, 1.0], TTestOptions::default())).unwrap();
/// assert_eq!(v, Verdict::Significant); // p = 1
/// ```
pub fn run_test<F>(test: F) -> Result<Verdict>
where
    F: FnOnce() -> Result<TestResult>,
{
    run_test_at(test, DEFAULT_SIGNIFICANCE_LEVEL)
}

/// Runs `test` and maps its p-value against `significance_level`.
///
/// The statistic is discarded. Errors from `test` are returned unchanged.
///
/// # Errors
///
/// `InvalidArgument` if `significance_level` is NaN or outside `[0, 1]`;
/// the test is not run in that case.
pub fn run_test_at<F>(test: F, significance_level: f64) -> Result<Verdict>
where
    F: FnOnce() -> Result<TestResult>,
{
    if !(0.0..=1.0).contains(&significance_level) {
        return Err(invalid(format!(
            "significance level must lie in [0, 1], got {significance_level}"
        )));
    }
    let result = test()?;
    Ok(if result.p_value <= significance_level {
        Verdict::NotSignificant
    } else {
        Verdict::Significant
    })
}
