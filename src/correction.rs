//! Multiple-comparison p-value adjustment.
//!
//! Adjusted p-values are returned in the caller's order, whatever order
//! the raw values arrive in.
//!
//! # Procedures
//!
//! - [`AdjustmentMethod::HolmBonferroni`] — step-down, controls the
//!   family-wise error rate
//! - [`AdjustmentMethod::BenjaminiHochberg`] — step-up, controls the false
//!   discovery rate
//! - [`AdjustmentMethod::Bonferroni`] — single-step, controls the
//!   family-wise error rate
//!
//! # References
//!
//! - Holm (1979). "A simple sequentially rejective multiple test
//!   procedure". Scandinavian Journal of Statistics, 6(2), 65–70.
//! - Benjamini & Hochberg (1995). "Controlling the false discovery rate".
//!   JRSS-B, 57(1), 289–300.

use tracing::trace;

use crate::error::{invalid, Result};

/// Multiple-comparison procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentMethod {
    /// Holm's step-down Bonferroni procedure.
    HolmBonferroni,
    /// Benjamini-Hochberg step-up procedure.
    BenjaminiHochberg,
    /// Plain Bonferroni: `min(1, m·p)`.
    Bonferroni,
}

/// Adjusts `p_values` for `m = p_values.len()` simultaneous tests.
///
/// # Algorithm
///
/// 1. Tag each p-value with its position and sort (ascending for Holm,
///    descending for Benjamini-Hochberg).
/// 2. At sorted rank i (0-based): Holm `min(1, (m−i)·p)`,
///    Benjamini-Hochberg `min(1, m/(m−i)·p)`.
/// 3. Running maximum (Holm) or minimum (Benjamini-Hochberg) along the
///    sorted order.
/// 4. Write each value back to its original position.
///
/// # Errors
///
/// `InvalidArgument` if any p-value is NaN or outside `[0, 1]`. An empty
/// slice yields an empty vector.
///
/// # Examples
///
/// ```
/// use u_hypothesis::correction::{adjust, AdjustmentMethod};
///
/// let adj = adjust(&[0.01, 0.02, 0.03, 0.04, 0.05], AdjustmentMethod::HolmBonferroni).unwrap();
/// let expected = [0.05, 0.08, 0.09, 0.09, 0.09];
/// for (a, e) in adj.iter().zip(expected.iter()) {
///     assert!((a - e).abs() < 1e-12);
/// }
/// ```
pub fn adjust(p_values: &[f64], method: AdjustmentMethod) -> Result<Vec<f64>> {
    if let Some(bad) = p_values.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        return Err(invalid(format!("p-values must lie in [0, 1], got {bad}")));
    }

    let adjusted = match method {
        AdjustmentMethod::HolmBonferroni => holm(p_values),
        AdjustmentMethod::BenjaminiHochberg => benjamini_hochberg(p_values),
        AdjustmentMethod::Bonferroni => {
            let m = p_values.len() as f64;
            p_values.iter().map(|&p| (m * p).min(1.0)).collect()
        }
    };
    trace!(m = p_values.len(), ?method, "p-values adjusted");
    Ok(adjusted)
}

fn holm(p_values: &[f64]) -> Vec<f64> {
    let m = p_values.len();
    let mut sorted = tagged(p_values);
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let stepped = sorted
        .iter()
        .enumerate()
        .map(|(i, &(idx, p))| (idx, ((m - i) as f64 * p).min(1.0)));
    scatter(m, running(stepped, f64::max))
}

fn benjamini_hochberg(p_values: &[f64]) -> Vec<f64> {
    let m = p_values.len();
    let mut sorted = tagged(p_values);
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mf = m as f64;
    let stepped = sorted
        .iter()
        .enumerate()
        .map(|(i, &(idx, p))| (idx, (mf / (m - i) as f64 * p).min(1.0)));
    scatter(m, running(stepped, f64::min))
}

fn tagged(p_values: &[f64]) -> Vec<(usize, f64)> {
    p_values.iter().copied().enumerate().collect()
}

// Cumulative max/min along the sorted order, keeping the index tags.
fn running<I, F>(stepped: I, combine: F) -> Vec<(usize, f64)>
where
    I: Iterator<Item = (usize, f64)>,
    F: Fn(f64, f64) -> f64,
{
    stepped
        .scan(None, |acc: &mut Option<f64>, (idx, v)| {
            let next = acc.map_or(v, |a| combine(a, v));
            *acc = Some(next);
            Some((idx, next))
        })
        .collect()
}

fn scatter(m: usize, tagged: Vec<(usize, f64)>) -> Vec<f64> {
    let mut out = vec![0.0; m];
    for (idx, v) in tagged {
        out[idx] = v;
    }
    out
}
