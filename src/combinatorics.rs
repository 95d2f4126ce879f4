//! Lazy enumeration for exact permutation distributions.
//!
//! Both iterators allocate one small vector per item and hold no other
//! state, so an exact p-value is a single `fold` over the sequence.
//!
//! # Complexity
//!
//! [`Combinations`] yields `C(n, k)` items and [`SignAssignments`] yields
//! `2ⁿ`. Neither caps its length: enumerating large inputs is the caller's
//! choice.

/// All `k`-subsets of `0..n` as sorted index vectors, in lexicographic order.
///
/// # Examples
///
/// ```
/// use u_hypothesis::combinatorics::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1]);
/// assert_eq!(all[5], vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Enumerates the `k`-subsets of `0..n`. Empty when `k > n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // rightmost position that can still move right
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// All `2ⁿ` assignments of a positive/negative sign to `n` items.
///
/// `true` marks a positive item. The first assignment is all-negative.
///
/// # Examples
///
/// ```
/// use u_hypothesis::combinatorics::SignAssignments;
///
/// let all: Vec<Vec<bool>> = SignAssignments::new(2).collect();
/// assert_eq!(all.len(), 4);
/// assert_eq!(all[0], vec![false, false]);
/// assert_eq!(all[3], vec![true, true]);
/// ```
#[derive(Debug, Clone)]
pub struct SignAssignments {
    signs: Vec<bool>,
    done: bool,
}

impl SignAssignments {
    /// Enumerates sign assignments of `n` items.
    pub fn new(n: usize) -> Self {
        Self {
            signs: vec![false; n],
            done: false,
        }
    }
}

impl Iterator for SignAssignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Vec<bool>> {
        if self.done {
            return None;
        }
        let current = self.signs.clone();

        // binary increment, least significant item first
        let mut i = 0;
        loop {
            if i == self.signs.len() {
                self.done = true;
                break;
            }
            if self.signs[i] {
                self.signs[i] = false;
                i += 1;
            } else {
                self.signs[i] = true;
                break;
            }
        }
        Some(current)
    }
}
