/*!
# Minimum Spanning Trees

Kruskal's and Prim's algorithm on undirected (multi-)graphs.
On disconnected graphs both return a minimum spanning *forest*: one tree per component.
Ties between equal weights are broken deterministically (by vertex pair for Kruskal,
by discovery order for Prim), so both algorithms always agree on the total weight.
*/

use std::{collections::BinaryHeap, fmt::Display, str::FromStr};

use super::*;

/// Selects the spanning tree algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MstAlgorithm {
    #[default]
    Kruskal,
    Prim,
}

impl FromStr for MstAlgorithm {
    type Err = GraphError;

    /// Parses `kruskal` or `prim`, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            _ => Err(GraphError::UnknownMstAlgorithm(s.to_string())),
        }
    }
}

impl Display for MstAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kruskal => write!(f, "kruskal"),
            Self::Prim => write!(f, "prim"),
        }
    }
}

/// Edges of a minimum spanning forest, in the order they were selected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
}

impl SpanningForest {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the selected edge weights
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

pub trait MinimumSpanningTree: IncidenceList + GraphType<Dir = Undirected> {
    /// Sorts all edges by weight and keeps those joining two different trees
    fn kruskal(&self) -> SpanningForest {
        let mut candidates = self.edges().iter().map(WeightOrdered).collect_vec();
        candidates.sort();

        let target = self.len().saturating_sub(1);
        let mut forest = UnionFind::from_elements(self.vertices());
        let mut edges = Vec::with_capacity(target);

        for WeightOrdered(edge) in candidates {
            if edges.len() == target {
                break;
            }
            if forest.union(edge.start, edge.end) {
                edges.push(edge.clone());
            }
        }

        debug!(
            algorithm = "kruskal",
            edges = edges.len(),
            "computed spanning forest"
        );
        SpanningForest { edges }
    }

    /// Grows a tree from the smallest unsettled vertex of every component,
    /// always settling the cheapest edge leaving the tree
    fn prim(&self) -> SpanningForest {
        let mut settled = FxHashSet::default();
        let mut edges = Vec::with_capacity(self.len().saturating_sub(1));
        let mut heap: BinaryHeap<MinScored<(Node, Option<&Edge>)>> = BinaryHeap::new();
        let mut seq = 0u64;

        for root in self.vertices() {
            if settled.contains(&root) {
                continue;
            }
            heap.push(MinScored::new(0.0, 0.0, seq, (root, None)));

            while let Some(MinScored {
                item: (u, via), ..
            }) = heap.pop()
            {
                if !settled.insert(u) {
                    continue;
                }
                if let Some(edge) = via {
                    edges.push(edge.clone());
                }

                let Ok(incident) = self.edges_of(u) else {
                    continue;
                };
                for edge in incident {
                    let v = if edge.start == u { edge.end } else { edge.start };
                    if !settled.contains(&v) {
                        seq += 1;
                        heap.push(MinScored::new(edge.weight, 0.0, seq, (v, Some(edge))));
                    }
                }
            }
        }

        debug!(
            algorithm = "prim",
            edges = edges.len(),
            "computed spanning forest"
        );
        SpanningForest { edges }
    }

    fn minimum_spanning_tree(&self, algorithm: MstAlgorithm) -> SpanningForest {
        match algorithm {
            MstAlgorithm::Kruskal => self.kruskal(),
            MstAlgorithm::Prim => self.prim(),
        }
    }

    /// Selects the algorithm by name (`kruskal` or `prim`, case-insensitive)
    fn minimum_spanning_tree_by_name(&self, algorithm: &str) -> Result<SpanningForest> {
        Ok(self.minimum_spanning_tree(algorithm.parse()?))
    }
}

impl<G: IncidenceList + GraphType<Dir = Undirected>> MinimumSpanningTree for G {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn weighted_square() -> Graph {
        Graph::from_edge_list([
            (0, 1, 1.0),
            (1, 2, 2.0),
            (2, 3, 1.0),
            (3, 0, 3.0),
            (0, 2, 5.0),
        ])
    }

    #[test]
    fn algorithm_names() {
        assert_eq!("Prim".parse::<MstAlgorithm>(), Ok(MstAlgorithm::Prim));
        assert_eq!("KRUSKAL".parse::<MstAlgorithm>(), Ok(MstAlgorithm::Kruskal));
        assert_eq!(
            "boruvka".parse::<MstAlgorithm>(),
            Err(GraphError::UnknownMstAlgorithm("boruvka".into()))
        );
        assert_eq!(MstAlgorithm::default().to_string(), "kruskal");
    }

    #[test]
    fn small_tree() {
        let graph = weighted_square();
        for algo in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
            let forest = graph.minimum_spanning_tree(algo);
            assert_eq!(forest.len(), 3);
            assert_eq!(forest.total_weight(), 4.0);
            assert!(forest.edges().iter().all(|e| e.weight < 3.0));
        }
        assert!(graph.minimum_spanning_tree_by_name("dijkstra").is_err());
    }

    #[test]
    fn forest_on_disconnected_graph() {
        let mut graph = MultiGraph::from_edge_list([
            (0, 1, 4.0),
            (0, 1, 1.0),
            (1, 1, 0.0),
            (5, 6, 2.0),
            (6, 7, 2.0),
            (5, 7, 2.0),
        ]);
        graph.add_vertex(9);

        for algo in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
            let forest = graph.minimum_spanning_tree(algo);
            assert_eq!(forest.len(), 3);
            assert_eq!(forest.total_weight(), 5.0);
            assert!(forest.edges().iter().all(|e| !e.is_loop()));
        }
        assert!(Graph::new().kruskal().is_empty());
        assert!(Graph::with_vertices(1).prim().is_empty());
    }

    #[test]
    fn kruskal_and_prim_agree_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);
        for _ in 0..30 {
            let n = rng.random_range(1..40u32);
            let edges = (0..rng.random_range(0..120))
                .map(|_| {
                    Edge::new(rng.random_range(0..n), rng.random_range(0..n))
                        .with_weight(rng.random_range(0..8) as Weight)
                })
                .collect_vec();
            let graph = MultiGraph::from_edges(0..n, edges);

            let kruskal = graph.kruskal();
            let prim = graph.prim();
            let expected = graph.len() - graph.number_of_connected_components();

            assert_eq!(kruskal.len(), expected);
            assert_eq!(prim.len(), expected);
            assert_eq!(kruskal.total_weight(), prim.total_weight());

            let tree = Graph::from_edges(graph.vertices(), kruskal.edges());
            assert_eq!(
                tree.number_of_connected_components(),
                graph.number_of_connected_components()
            );
        }
    }
}
