use super::*;

/// Barabási–Albert preferential attachment.
///
/// The graph starts from a clique on the vertices `0..=m`. Every further vertex `u` attaches to
/// `m` distinct earlier vertices, each drawn with probability proportional to its current degree.
#[derive(Debug, Copy, Clone, Default)]
pub struct BarabasiAlbert {
    n: NumNodes,
    m: NumNodes,
}

impl BarabasiAlbert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges every new vertex attaches with
    pub fn attachments(mut self, m: NumNodes) -> Self {
        self.m = m;
        self
    }

    /// Number of edges a valid configuration produces: the seed clique plus `m` per further vertex
    pub fn expected_edges(&self) -> u64 {
        let (n, m) = (self.n as u64, self.m as u64);
        m * (m + 1) / 2 + n.saturating_sub(m + 1) * m
    }
}

impl NumNodesGen for BarabasiAlbert {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for BarabasiAlbert {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Fails unless `1 <= m < n`
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng,
    {
        let (n, m) = (self.n, self.m);
        if m == 0 || m >= n {
            return Err(GraphError::InvalidParameter(format!(
                "preferential attachment needs 1 <= m < n, got m = {m} and n = {n}"
            )));
        }

        let mut edges = Vec::with_capacity(usize::try_from(self.expected_edges()).unwrap_or(0));
        edges.extend((0..=m).flat_map(|u| (u + 1..=m).map(move |v| Edge::new(u, v))));

        // Every vertex appears once per incident edge
        let mut pool: Vec<Node> = edges.iter().flat_map(|e| [e.start, e.end]).collect();
        let mut targets: Vec<Node> = Vec::with_capacity(m as usize);

        for u in (m + 1)..n {
            targets.clear();
            while targets.len() < m as usize {
                let t = pool[rng.random_range(0..pool.len())];
                if t == u || targets.contains(&t) {
                    continue;
                }

                targets.push(t);
                edges.push(Edge::new(t, u));
                pool.push(t);
                pool.push(u);
            }
        }

        debug!(nodes = n, edges = edges.len(), m, "grew preferential attachment graph");
        Ok(edges)
    }
}
