/*!
# Clustering Coefficients

Local, average and global clustering of undirected graphs.
Loops and parallel edges are ignored: only distinct neighbors other than the vertex
itself are considered.
*/

use super::*;

pub trait Clustering: AdjacencyList + AdjacencyTest + GraphType<Dir = Undirected> {
    /// Distinct neighbors of `u` without `u` itself
    fn distinct_neighbors_of(&self, u: Node) -> Result<FxHashSet<Node>> {
        Ok(self.neighbors_of(u)?.filter(|&v| v != u).collect())
    }

    /// Number of edges among the distinct neighbors of `u`
    fn links_among_neighbors_of(&self, u: Node) -> Result<u64> {
        let neighbors = self.distinct_neighbors_of(u)?;
        Ok(neighbors
            .iter()
            .tuple_combinations()
            .filter(|&(&v, &w)| self.has_edge(v, w))
            .count() as u64)
    }

    /// Fraction of neighbor pairs of `u` that are adjacent; `0` if `u` has less than two neighbors
    fn local_clustering(&self, u: Node) -> Result<f64> {
        let k = self.distinct_neighbors_of(u)?.len() as f64;
        if k < 2.0 {
            return Ok(0.0);
        }
        Ok(2.0 * self.links_among_neighbors_of(u)? as f64 / (k * (k - 1.0)))
    }

    /// Mean of the local clustering over all vertices; `0` for the empty graph
    fn average_clustering(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .vertices()
            .map(|u| self.local_clustering(u).unwrap_or(0.0))
            .sum();
        sum / self.len() as f64
    }

    /// Number of triangles
    fn number_of_triangles(&self) -> u64 {
        self.vertices()
            .map(|u| self.links_among_neighbors_of(u).unwrap_or(0))
            .sum::<u64>()
            / 3
    }

    /// Three times the number of triangles divided by the number of connected triples;
    /// `0` if there are no triples
    fn global_clustering(&self) -> f64 {
        let (closed, triples) = self
            .vertices()
            .map(|u| {
                let k = self.distinct_neighbors_of(u).map_or(0, |nbs| nbs.len()) as u64;
                let links = self.links_among_neighbors_of(u).unwrap_or(0);
                (links, k * k.saturating_sub(1) / 2)
            })
            .fold((0u64, 0u64), |(a, b), (c, d)| (a + c, b + d));

        if triples == 0 {
            0.0
        } else {
            closed as f64 / triples as f64
        }
    }
}

impl<G> Clustering for G where G: AdjacencyList + AdjacencyTest + GraphType<Dir = Undirected> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::StructuredGraph;

    #[test]
    fn triangle_with_tail() {
        // triangle 0-1-2 and pendant 3 at 2
        let graph = Graph::from_edge_list([(0, 1), (1, 2), (2, 0), (2, 3)]);

        assert_eq!(graph.local_clustering(0), Ok(1.0));
        assert_eq!(graph.local_clustering(2), Ok(1.0 / 3.0));
        assert_eq!(graph.local_clustering(3), Ok(0.0));
        assert_eq!(graph.local_clustering(8), Err(GraphError::UnknownVertex(8)));
        assert_eq!(graph.number_of_triangles(), 1);

        // 3 closed triples out of 1 + 1 + 3 + 0
        assert_eq!(graph.global_clustering(), 3.0 / 5.0);
        assert!((graph.average_clustering() - (1.0 + 1.0 + 1.0 / 3.0) / 4.0).abs() < 1e-12);
    }

    #[test]
    fn loops_and_parallel_edges_are_ignored() {
        let graph = MultiGraph::from_edge_list([(0, 1), (0, 1), (1, 2), (2, 0), (0, 0)]);
        assert_eq!(graph.local_clustering(0), Ok(1.0));
        assert_eq!(graph.global_clustering(), 1.0);
        assert_eq!(graph.number_of_triangles(), 1);
    }

    #[test]
    fn cliques_and_trivial_graphs() {
        let clique = Graph::clique(6);
        assert_eq!(clique.global_clustering(), 1.0);
        assert_eq!(clique.average_clustering(), 1.0);
        assert_eq!(clique.number_of_triangles(), 20);

        assert_eq!(Graph::new().average_clustering(), 0.0);
        assert_eq!(Graph::new().global_clustering(), 0.0);
        assert_eq!(Graph::cycle(5).global_clustering(), 0.0);
    }
}
