//! Average ranks with tie bookkeeping.
//!
//! Rank-based tests need two things from a sample: the rank of every
//! observation (ties share the mean of the ranks they span) and the tie
//! statistic `Σ (tₖ³ − tₖ)` over tie groups, which enters the variance of
//! the normal approximation.
//!
//! # Examples
//!
//! ```
//! use u_hypothesis::rank::rank;
//!
//! let r = rank(&[10.0, 20.0, 20.0, 30.0]);
//! assert_eq!(r.ranks, vec![1.0, 2.5, 2.5, 4.0]);
//! assert_eq!(r.tie_correction, 6.0); // one pair: 2³ − 2
//! assert!(r.has_ties());
//! ```

use std::cmp::Ordering;

/// Ranks of a sequence, in the sequence's original order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Tie statistic `Σ (tₖ³ − tₖ)` over groups of tied values.
    pub tie_correction: f64,
    /// 1-based average ranks, `ranks[i]` belonging to input element `i`.
    pub ranks: Vec<f64>,
}

impl Ranking {
    /// `true` if at least two elements compared equal.
    pub fn has_ties(&self) -> bool {
        self.tie_correction != 0.0
    }
}

/// Ranks `f64` values in ascending order.
///
/// NaN is ordered by [`f64::total_cmp`]; callers reject non-finite samples
/// before ranking.
pub fn rank(values: &[f64]) -> Ranking {
    rank_by(values, |a, b| a.total_cmp(b))
}

/// Ranks arbitrary values with a caller-supplied total order.
///
/// Elements for which `cmp` returns [`Ordering::Equal`] form a tie group and
/// all receive the average of the positions they occupy.
pub fn rank_by<T, F>(values: &[T], mut cmp: F) -> Ranking
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| cmp(&values[a], &values[b]));

    let mut ranks = vec![0.0; n];
    let mut tie_correction = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && cmp(&values[order[i]], &values[order[j]]) == Ordering::Equal {
            j += 1;
        }
        // positions i..j (0-based) hold ranks i+1..=j
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg_rank;
        }
        let t = (j - i) as f64;
        if j - i > 1 {
            tie_correction += t * t * t - t;
        }
        i = j;
    }

    Ranking {
        tie_correction,
        ranks,
    }
}
