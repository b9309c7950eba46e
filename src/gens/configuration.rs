use rand::seq::SliceRandom;

use super::*;

/// Configuration model: vertex `i` is expanded into `degrees[i]` half-edges which are shuffled
/// uniformly at random and paired up consecutively.
///
/// Self-loops and parallel edges may be produced; a simple target graph merges them.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationModel {
    degrees: Vec<NumNodes>,
}

impl ConfigurationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degree sequence; vertex `i` gets the `i`-th degree
    pub fn degrees(mut self, degrees: impl IntoIterator<Item = NumNodes>) -> Self {
        self.degrees = degrees.into_iter().collect();
        self
    }
}

impl GraphGenerator for ConfigurationModel {
    fn number_of_nodes(&self) -> NumNodes {
        self.degrees.len() as NumNodes
    }

    /// Fails with [`GraphError::OddDegreeSum`] if the half-edges cannot be paired
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        let sum = even_degree_sum(&self.degrees)?;

        let mut half_edges = Vec::with_capacity(sum as usize);
        for (u, &d) in self.degrees.iter().enumerate() {
            half_edges.extend(std::iter::repeat_n(u as Node, d as usize));
        }
        half_edges.shuffle(rng);

        let edges: Vec<Edge> = half_edges
            .chunks_exact(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .collect();
        debug!(
            nodes = self.degrees.len(),
            edges = edges.len(),
            "paired half-edges"
        );
        Ok(edges)
    }
}

/// Chung–Lu model: the pair `{i, j}` with `i != j` is an edge independently with probability
/// `min(1, w_i w_j / S)` where `w` are the expected degrees and `S` their sum.
#[derive(Debug, Clone, Default)]
pub struct ChungLu {
    weights: Vec<NumNodes>,
}

impl ChungLu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected degrees; vertex `i` gets the `i`-th value
    pub fn expected_degrees(mut self, weights: impl IntoIterator<Item = NumNodes>) -> Self {
        self.weights = weights.into_iter().collect();
        self
    }
}

impl GraphGenerator for ChungLu {
    fn number_of_nodes(&self) -> NumNodes {
        self.weights.len() as NumNodes
    }

    /// Fails with [`GraphError::OddDegreeSum`] if the expected degrees sum up to an odd number
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        let sum = even_degree_sum(&self.weights)?;
        if sum == 0 {
            return Ok(Vec::new());
        }

        let total = sum as f64;
        let mut edges = Vec::new();
        for (i, &wi) in self.weights.iter().enumerate() {
            if wi == 0 {
                continue;
            }
            for (j, &wj) in self.weights.iter().enumerate().skip(i + 1) {
                let p = (wi as f64 * wj as f64 / total).min(1.0);
                if p > 0.0 && rng.random_bool(p) {
                    edges.push(Edge::new(i as Node, j as Node));
                }
            }
        }

        debug!(nodes = self.weights.len(), edges = edges.len(), "sampled Chung-Lu graph");
        Ok(edges)
    }
}
