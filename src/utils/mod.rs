/*!
# Utilities

Small helpers shared by algorithms and generators:
- [`Probability`] validation and clamping for generator parameters,
- [`MinScored`], a heap entry that turns `BinaryHeap` into a min-queue on float scores,
- [`GeometricJumper`], skip sampling of independent Bernoulli trials.
*/

use std::cmp::Ordering;

use num::{One, Zero};

use crate::edge::Weight;

mod geometric;
pub use geometric::*;

/// Helper trait for probabilities
pub trait Probability: Sized {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;

    /// Clamps the value into `[0, 1]`
    fn clamp_probability(self) -> Self;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }

    fn clamp_probability(self) -> Self {
        if self < Self::zero() {
            Self::zero()
        } else if self > Self::one() {
            Self::one()
        } else {
            self
        }
    }
}

/// Entry of a `BinaryHeap` that pops the smallest `(score, tie, seq)` first.
///
/// Scores are compared with `f64::total_cmp`; `seq` is a strictly increasing insertion
/// counter, so equal scores leave the heap in insertion order.
#[derive(Debug, Clone)]
pub struct MinScored<T> {
    pub score: Weight,
    pub tie: Weight,
    pub seq: u64,
    pub item: T,
}

impl<T> MinScored<T> {
    pub fn new(score: Weight, tie: Weight, seq: u64, item: T) -> Self {
        Self {
            score,
            tie,
            seq,
            item,
        }
    }
}

impl<T> Ord for MinScored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.tie.total_cmp(&self.tie))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for MinScored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for MinScored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for MinScored<T> {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use itertools::Itertools;

    use super::*;

    #[test]
    fn probabilities() {
        assert!(0.5f64.is_valid_probability());
        assert!(!1.5f64.is_valid_probability());
        assert!(!(-0.1f64).is_valid_probability());
        assert_eq!(1.5f64.clamp_probability(), 1.0);
        assert_eq!((-3.0f64).clamp_probability(), 0.0);
        assert_eq!(0.25f64.clamp_probability(), 0.25);
    }

    #[test]
    fn heap_pops_minimum_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        for (seq, (score, item)) in [(2.0, 'a'), (1.0, 'b'), (2.0, 'c'), (1.0, 'd'), (0.5, 'e')]
            .into_iter()
            .enumerate()
        {
            heap.push(MinScored::new(score, 0.0, seq as u64, item));
        }
        let order = std::iter::from_fn(|| heap.pop().map(|e| e.item)).collect_vec();
        assert_eq!(order, vec!['e', 'b', 'd', 'a', 'c']);
    }
}
