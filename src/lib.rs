//! # u-hypothesis
//!
//! Statistical hypothesis testing with exact and asymptotic null
//! distributions, plus multiple-comparison adjustment.
//!
//! Every test operates on raw `f64` slices and returns a statistic together
//! with a p-value under the caller's alternative hypothesis.
//!
//! ## Modules
//!
//! - [`testing`] — t-tests, chi-squared, Mann-Whitney U, Wilcoxon signed-rank, sign test
//! - [`correction`] — Holm-Bonferroni, Benjamini-Hochberg and Bonferroni adjustment
//! - [`distribution`] — Cumulative probabilities for the null distributions
//! - [`rank`] — Average ranks and tie statistics
//! - [`combinatorics`] — Lazy subset and sign-pattern enumeration for exact tests
//! - [`error`] — Error type shared by every operation
//!
//! ## Design Philosophy
//!
//! - **Exact where feasible**: Small tie-free samples use the permutation distribution
//! - **Numerical stability**: Leverages `u-numflow` for special functions and moments
//! - **Explicit failures**: Invalid or degenerate input is an error, never a NaN p-value

pub mod combinatorics;
pub mod correction;
pub mod distribution;
pub mod error;
pub mod rank;
pub mod testing;

pub use error::{Result, TestError};
