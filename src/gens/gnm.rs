use fxhash::FxHashMap;

use super::*;

/// Configuration type used by [`Gnm`] to determine how the graph should be parameterized.
#[derive(Debug, Copy, Clone, Default)]
enum GnmType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Fixed number of edges `m`.
    Edges(NumEdges),
    /// Average degree `d`, to be converted to `m = d*n/2`.
    AvgDeg(f64),
}

/// Generator for uniform `G(n,m)` random graphs with `n` nodes and `m` distinct undirected edges.
///
/// The generator can be parameterized via:
/// - `.nodes(n)`: total number of nodes
/// - `.edges(m)` or `.avg_deg(d)`: total number of edges or average degree
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: NumNodes,
    m: GnmType,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }

    fn number_of_pairs(&self) -> u64 {
        let n = self.n as u64;
        n * n.saturating_sub(1) / 2
    }

    fn target_edges(&self) -> Result<u64> {
        let m = match self.m {
            GnmType::NotSet => {
                return Err(GraphError::InvalidParameter(
                    "number of edges of G(n,m) was not set".into(),
                ));
            }
            GnmType::Edges(m) => m as u64,
            GnmType::AvgDeg(d) if d.is_finite() && d >= 0.0 => {
                (self.n as f64 * d / 2.0).round() as u64
            }
            GnmType::AvgDeg(d) => {
                return Err(GraphError::InvalidParameter(format!(
                    "invalid average degree {d}"
                )));
            }
        };

        let pairs = self.number_of_pairs();
        if m > pairs {
            return Err(GraphError::InvalidParameter(format!(
                "{m} edges exceed the {pairs} vertex pairs of {} nodes",
                self.n
            )));
        }
        Ok(m)
    }
}

impl NumNodesGen for Gnm {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for Gnm {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = GnmType::Edges(m);
    }
}

impl AverageDegreeGen for Gnm {
    /// Sets the average degree `d` in the graph.
    ///
    /// Internally converted to an edge count: `m = d*n/2`.
    fn set_avg_deg(&mut self, deg: f64) {
        self.m = GnmType::AvgDeg(deg);
    }
}

impl GraphGenerator for Gnm {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Edges are uniformly sampled without replacement.
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        let m = self.target_edges()?;
        Ok(GnmGenerator::new(rng, self.n as u64, m).collect())
    }
}

/// Given `n` nodes this iterator produces exactly `m` uniformly random and distinct
/// undirected edges without replacement.
///
/// The algorithm used is based on:
/// > *V. Batagelj and U. Brandes. Efficient Generation of Large Random Networks.
/// > Physical Review E 71.3 (2005): 036113.*
///
/// Instead of shuffling all pairs, a sparse map records the swaps of a virtual Fisher-Yates
/// shuffle, so memory is linear in `m`.
pub struct GnmGenerator<'a, R: Rng> {
    n: u64,
    rem: u64,
    cur: u64,
    end: u64,
    map: FxHashMap<u64, u64>,
    rng: &'a mut R,
}

impl<'a, R: Rng> GnmGenerator<'a, R> {
    /// Creates a new `GnmGenerator` for `m <= n(n-1)/2`.
    pub fn new(rng: &'a mut R, n: u64, m: u64) -> Self {
        let end = n * n.saturating_sub(1) / 2;
        debug_assert!(m <= end);

        Self {
            n,
            rem: m.min(end),
            cur: 0,
            end,
            map: FxHashMap::with_capacity_and_hasher(m as usize, Default::default()),
            rng,
        }
    }

    /// Selects the next unique pair index by one step of the virtual shuffle
    fn next_step(&mut self) -> Option<u64> {
        if self.rem == 0 {
            return None;
        }

        // Draw value and check if it was swapped before
        let drawn = self.rng.random_range(self.cur..self.end);
        let value = self.map.get(&drawn).copied().unwrap_or(drawn);

        // The slot of `drawn` now holds whatever `cur` held
        let replacement = self.map.get(&self.cur).copied().unwrap_or(self.cur);
        self.map.insert(drawn, replacement);

        self.cur += 1;
        self.rem -= 1;

        Some(value)
    }
}

impl<R: Rng> Iterator for GnmGenerator<'_, R> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step().map(|x| Edge::from_u64_undir(x, self.n))
    }

    /// Returns the number of edges remaining to be generated.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<R: Rng> ExactSizeIterator for GnmGenerator<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn exact_number_of_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for (n, m) in [(2, 1), (10, 0), (10, 45), (30, 100), (200, 1000)] {
            let graph = Graph::erdos_renyi_edges(rng, n, m).unwrap();
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), m);
            assert_eq!(graph.number_of_loops(), 0);
        }
    }

    #[test]
    fn complete_draw_is_clique() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let graph = Graph::erdos_renyi_edges(rng, 9, 36).unwrap();
        assert_eq!(graph, Graph::clique(9));
    }

    #[test]
    fn too_many_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert!(matches!(
            Graph::erdos_renyi_edges(rng, 5, 11),
            Err(GraphError::InvalidParameter(_))
        ));
        assert!(Gnm::new().nodes(5).generate(rng).is_err());
    }

    #[test]
    fn generator_yields_distinct_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);
        let edges = GnmGenerator::new(rng, 50, 600).collect_vec();
        assert_eq!(edges.len(), 600);
        assert_eq!(edges.iter().map(Edge::key).unique().count(), 600);
        assert!(edges.iter().all(|e| !e.is_loop() && e.end < 50));
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);
        let edges = Gnm::new().nodes(100).avg_deg(4.0).generate(rng).unwrap();
        assert_eq!(edges.len(), 200);
    }
}
