/*!
# Degree Sequences

Tests whether a sequence of non-negative integers is *graphic*, i.e. the degree
sequence of a simple graph, using the Erdős–Gallai theorem.
*/

use std::iter;

use super::*;

/// Returns *true* if `sequence` is the degree sequence of some simple graph.
///
/// The empty sequence is graphic; sequences with an odd sum are not.
/// Runs in linear time: entries are counting-sorted (no degree may reach `n` anyway)
/// and the right-hand side of every inequality is maintained with a monotone pointer
/// into suffix sums.
pub fn is_erdos_gallai(sequence: &[NumNodes]) -> bool {
    let n = sequence.len();
    if n == 0 {
        return true;
    }

    let total: u64 = sequence.iter().map(|&d| d as u64).sum();
    if total % 2 == 1 || sequence.iter().any(|&d| d as usize >= n) {
        return false;
    }

    let mut counts = vec![0usize; n];
    for &d in sequence {
        counts[d as usize] += 1;
    }
    let degrees = (0..n)
        .rev()
        .flat_map(|d| iter::repeat_n(d as u64, counts[d]))
        .collect_vec();

    let mut suffix = vec![0u64; n + 1];
    for i in (0..n).rev() {
        suffix[i] = suffix[i + 1] + degrees[i];
    }

    let mut prefix = 0u64;
    // number of entries with degree at least `k`
    let mut at_least_k = n;
    for k in 1..=n {
        prefix += degrees[k - 1];
        while at_least_k > 0 && degrees[at_least_k - 1] < k as u64 {
            at_least_k -= 1;
        }

        let cut = at_least_k.max(k);
        let kk = k as u64;
        let bound = kk * (kk - 1) + kk * (cut - k) as u64 + suffix[cut];
        if prefix > bound {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::RandomGraph;

    fn naive(sequence: &[NumNodes]) -> bool {
        let mut degrees = sequence.iter().map(|&d| d as u64).collect_vec();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        if degrees.iter().sum::<u64>() % 2 == 1 {
            return false;
        }

        (1..=degrees.len()).all(|k| {
            let lhs: u64 = degrees[..k].iter().sum();
            let rhs = (k * (k - 1)) as u64
                + degrees[k..].iter().map(|&d| d.min(k as u64)).sum::<u64>();
            lhs <= rhs
        })
    }

    #[test]
    fn known_sequences() {
        assert!(is_erdos_gallai(&[]));
        assert!(is_erdos_gallai(&[1, 1]));
        assert!(!is_erdos_gallai(&[2]));
        assert!(!is_erdos_gallai(&[1, 2]));
        assert!(is_erdos_gallai(&[0, 0]));
        assert!(is_erdos_gallai(&[2, 2, 2]));
        assert!(is_erdos_gallai(&[3, 3, 3, 3]));
        assert!(is_erdos_gallai(&[1, 1, 4, 1, 1]));
        assert!(!is_erdos_gallai(&[1]));
        assert!(!is_erdos_gallai(&[3, 3, 1, 1]));
        assert!(!is_erdos_gallai(&[2, 0]));
        assert!(!is_erdos_gallai(&[4, 4, 4, 1, 1]));
    }

    #[test]
    fn agrees_with_quadratic_check() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xe6);
        for _ in 0..2000 {
            let n = rng.random_range(1..12);
            let seq = (0..n).map(|_| rng.random_range(0..n as NumNodes + 2)).collect_vec();
            assert_eq!(is_erdos_gallai(&seq), naive(&seq), "{seq:?}");
        }
    }

    #[test]
    fn degree_sequences_of_graphs_are_graphic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xe7);
        for _ in 0..50 {
            let graph = Graph::erdos_renyi(rng, 30, 0.2);
            assert!(is_erdos_gallai(&graph.degree_sequence()));
        }
    }
}
