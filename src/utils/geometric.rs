use rand::Rng;
use rand_distr::{Distribution, Geometric, StandardGeometric};

/// A geometric distribution.
/// The case `p = 1/2` is served by `StandardGeometric`, which avoids a logarithm per draw.
#[derive(Debug, Copy, Clone)]
pub enum GeometricDistribution {
    /// General geometric distribution
    General(Geometric),
    /// Geometric distribution for `p = 1/2`
    OneHalf(StandardGeometric),
}

impl Distribution<u64> for GeometricDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match self {
            GeometricDistribution::General(distr) => distr.sample(rng),
            GeometricDistribution::OneHalf(distr) => distr.sample(rng),
        }
    }
}

impl GeometricDistribution {
    /// Returns *None* if `prob` is not in `(0, 1]`
    pub fn from_prob(prob: f64) -> Option<Self> {
        if prob == 0.5 {
            Some(Self::OneHalf(StandardGeometric))
        } else if prob > 0.0 {
            Geometric::new(prob).ok().map(Self::General)
        } else {
            None
        }
    }
}

/// Yields every position in `0..stop` independently with probability `p` by jumping over the
/// misses with geometrically distributed step sizes.
pub struct GeometricJumper<'a, R: Rng> {
    distr: GeometricDistribution,
    next: u64,
    stop: u64,
    rng: &'a mut R,
}

impl<'a, R: Rng> GeometricJumper<'a, R> {
    /// Returns *None* if `prob` is not in `(0, 1]`
    pub fn new(rng: &'a mut R, prob: f64, stop: u64) -> Option<Self> {
        Some(Self {
            distr: GeometricDistribution::from_prob(prob)?,
            next: 0,
            stop,
            rng,
        })
    }
}

impl<R: Rng> Iterator for GeometricJumper<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next >= self.stop {
            return None;
        }

        let pos = self.next.saturating_add(self.distr.sample(self.rng));
        if pos >= self.stop {
            self.next = self.stop;
            return None;
        }

        self.next = pos + 1;
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn jumps_are_strictly_increasing() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let hits = GeometricJumper::new(rng, 0.3, 10_000).unwrap().collect_vec();

        assert!(hits.iter().tuple_windows().all(|(a, b)| a < b));
        assert!(hits.iter().all(|&x| x < 10_000));
        // expectation is 3000
        assert!((2_700..3_300).contains(&hits.len()));
    }

    #[test]
    fn certain_hits_every_position() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let hits = GeometricJumper::new(rng, 1.0, 50).unwrap().collect_vec();
        assert_eq!(hits, (0..50).collect_vec());
    }

    #[test]
    fn invalid_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert!(GeometricJumper::new(rng, 0.0, 10).is_none());
        assert!(GeometricJumper::new(rng, 1.5, 10).is_none());
        assert!(GeometricDistribution::from_prob(0.5).is_some());
    }
}
