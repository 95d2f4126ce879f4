//! Error type shared by every test in the crate.

/// Reasons a hypothesis test cannot produce a result.
///
/// All validation happens before any computation, so an error never comes
/// with a partial result. Violated internal invariants (for example
/// `U₁ + U₂ ≠ n₁n₂` in the Mann-Whitney test) are programming defects and
/// panic instead of being reported here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TestError {
    /// Two inputs that must line up have different lengths.
    ///
    /// Raised for paired samples of unequal length, an `expected` vector that
    /// does not match `observed`, and a contingency table whose length does
    /// not match its shape.
    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Length implied by the other input.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// An input violates the test's preconditions (empty sample, negative
    /// count, non-finite value, threshold out of range, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The null model cannot be evaluated for this input, e.g. a zero
    /// expected frequency or a sample with zero variance.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TestError>;

pub(crate) fn invalid(msg: impl Into<String>) -> TestError {
    TestError::InvalidArgument(msg.into())
}

pub(crate) fn degenerate(msg: impl Into<String>) -> TestError {
    TestError::DegenerateInput(msg.into())
}

/// Rejects empty or non-finite samples.
pub(crate) fn ensure_finite(data: &[f64], what: &str) -> Result<()> {
    if data.is_empty() {
        return Err(invalid(format!("{what} is empty")));
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(invalid(format!("{what} contains non-finite values")));
    }
    Ok(())
}

pub(crate) fn ensure_same_len(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(TestError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = TestError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 3 elements, got 2");
        assert_eq!(invalid("x is empty").to_string(), "invalid argument: x is empty");
        assert_eq!(
            degenerate("zero variance").to_string(),
            "degenerate input: zero variance"
        );
    }

    #[test]
    fn finite_check() {
        assert!(ensure_finite(&[1.0, 2.0], "sample").is_ok());
        assert!(matches!(
            ensure_finite(&[], "sample"),
            Err(TestError::InvalidArgument(_))
        ));
        assert!(matches!(
            ensure_finite(&[1.0, f64::INFINITY], "sample"),
            Err(TestError::InvalidArgument(_))
        ));
    }

    #[test]
    fn length_check() {
        assert!(ensure_same_len(&[1.0], &[2.0]).is_ok());
        assert_eq!(
            ensure_same_len(&[1.0, 2.0], &[3.0]),
            Err(TestError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
