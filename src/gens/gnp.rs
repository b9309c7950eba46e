use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible undirected edge between `n` nodes with probability `p`
/// independent from each other. Self-loops are never generated.
///
/// Instead of drawing one coin per vertex pair, the generator jumps over the misses with
/// geometrically distributed step sizes, so the running time is linear in the number of edges.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly; values outside of `[0, 1]` are clamped
    pub fn prob(mut self, prob: f64) -> Self {
        self.p = GnpType::Prob(prob.clamp_probability());
        self
    }

    /// The probability of an edge as configured
    fn edge_probability(&self) -> Result<f64> {
        match self.p {
            GnpType::NotSet => Err(GraphError::InvalidParameter(
                "edge probability of G(n,p) was not set".into(),
            )),
            GnpType::Prob(p) => Ok(p),
            GnpType::AvgDeg(_) if self.n < 2 => Ok(0.0),
            GnpType::AvgDeg(d) => {
                let p = d / (self.n - 1) as f64;
                if p.is_valid_probability() {
                    Ok(p)
                } else {
                    Err(GraphError::InvalidParameter(format!(
                        "average degree {d} is invalid for {} nodes",
                        self.n
                    )))
                }
            }
        }
    }

    /// Draws the edges for a probability in `[0, 1]`
    pub(super) fn sample<R: Rng>(&self, rng: &mut R, p: f64) -> Vec<Edge> {
        let n = self.n as u64;
        let pairs = n * n.saturating_sub(1) / 2;
        let to_edge = |x: u64| Edge::from_u64_undir(x, n);

        // Different between easy and hard cases with little overhead
        if pairs == 0 || p.is_nan() || p <= 0.0 {
            return Vec::new();
        }
        if p >= 1.0 {
            return (0..pairs).map(to_edge).collect();
        }

        GeometricJumper::new(rng, p, pairs)
            .map(|jumper| jumper.map(to_edge).collect())
            .unwrap_or_default()
    }
}

impl NumNodesGen for Gnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `generate`.
    fn set_avg_deg(&mut self, deg: f64) {
        self.p = GnpType::AvgDeg(deg);
    }
}

impl GraphGenerator for Gnp {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        let p = self.edge_probability()?;
        Ok(self.sample(rng, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in [0, 1, 2, 7, 20] {
            assert_eq!(Graph::erdos_renyi(rng, n, 0.0), Graph::empty(n));
            assert_eq!(Graph::erdos_renyi(rng, n, 1.0), Graph::clique(n));
            assert_eq!(Graph::erdos_renyi(rng, n, -3.0), Graph::empty(n));
            assert_eq!(Graph::erdos_renyi(rng, n, 7.5), Graph::clique(n));
            assert_eq!(MultiGraph::erdos_renyi(rng, n, 1.0), MultiGraph::clique(n));

            // oriented targets receive one orientation per pair, unlike the oriented clique
            let oriented: OrientedGraph = Gnp::new().nodes(n).prob(1.0).build(rng).unwrap();
            let pairs = n as NumEdges * n.saturating_sub(1) as NumEdges;
            assert_eq!(oriented.number_of_edges(), pairs / 2);
            assert_eq!(OrientedGraph::clique(n).number_of_edges(), pairs);
            assert_eq!(oriented.symmetrize(), OrientedGraph::clique(n).symmetrize());
        }
    }

    #[test]
    fn edges_are_distinct_pairs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        let edges = Gnp::new().nodes(100).prob(0.1).generate(rng).unwrap();

        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
        assert!(edges.iter().all(|e| e.end < 100));
        assert_eq!(edges.iter().map(Edge::key).unique().count(), edges.len());

        // expectation is 495
        assert!((400..600).contains(&edges.len()));
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph: Graph = Gnp::new().nodes(201).avg_deg(10.0).build(rng).unwrap();

        assert_eq!(graph.number_of_nodes(), 201);
        let avg = 2.0 * graph.number_of_edges() as f64 / 201.0;
        assert!((8.5..11.5).contains(&avg));

        assert!(Gnp::new().nodes(10).avg_deg(10.0).generate(rng).is_err());
        assert!(Gnp::new().nodes(10).generate(rng).is_err());
    }
}
