use itertools::Itertools;
use tracing::warn;

use super::*;

/// Watts–Strogatz small-world graphs.
///
/// Starts from a ring lattice on `n` vertices where every vertex is connected to its `k/2`
/// nearest neighbors on either side. Then every lattice edge `{u, u + j}` is rewired with
/// probability `beta` to `{u, w}` for a uniform `w` that is not yet adjacent to `u`.
/// The number of edges never changes.
#[derive(Debug, Copy, Clone, Default)]
pub struct WattsStrogatz {
    n: NumNodes,
    k: NumNodes,
    beta: f64,
}

impl WattsStrogatz {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean degree `k` of the lattice; must be even
    pub fn mean_degree(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }

    /// Rewiring probability `beta`
    pub fn rewiring(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.k % 2 == 1 {
            return Err(GraphError::OddMeanDegree(self.k));
        }
        if self.k >= self.n && self.k > 0 {
            return Err(GraphError::InvalidParameter(format!(
                "mean degree {} needs more than {} nodes",
                self.k, self.n
            )));
        }
        if !self.beta.is_valid_probability() {
            return Err(GraphError::InvalidParameter(format!(
                "rewiring probability {} is not in [0, 1]",
                self.beta
            )));
        }
        Ok(())
    }
}

impl NumNodesGen for WattsStrogatz {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl AverageDegreeGen for WattsStrogatz {
    /// Rounds `deg` to the closest integer; odd results are rejected on generation
    fn set_avg_deg(&mut self, deg: f64) {
        self.k = deg.round().max(0.0) as NumNodes;
    }
}

impl GraphGenerator for WattsStrogatz {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Fails with [`GraphError::OddMeanDegree`] for odd `k` and with
    /// [`GraphError::InvalidParameter`] if `k >= n` or `beta` is not a probability
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        self.validate()?;
        let (n, half) = (self.n, self.k / 2);

        let lattice = (0..n)
            .flat_map(|u| (1..=half).map(move |j| Edge::new(u, (u + j) % n)))
            .collect_vec();
        let mut graph = Graph::from_edges(0..n, lattice.iter());

        let mut saturated = 0;
        for edge in &lattice {
            if !rng.random_bool(self.beta) {
                continue;
            }

            let u = edge.start;
            if graph.degree_of(u)? + 1 >= n {
                saturated += 1;
                continue;
            }

            let w = loop {
                let w = rng.random_range(0..n);
                if w != u && !graph.has_edge(u, w) {
                    break w;
                }
            };
            graph.remove_edge(u, edge.end);
            graph.add_edge((u, w));
        }

        if saturated > 0 {
            warn!(saturated, "lattice edges kept as their vertex is adjacent to all others");
        }
        debug!(nodes = n, edges = graph.number_of_edges(), "rewired ring lattice");
        Ok(graph.edges().to_vec())
    }
}
