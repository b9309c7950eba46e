use std::collections::btree_map::Entry;

use super::*;
use crate::testing::test_graph_ops;

/// An undirected graph over sparse vertex ids.
///
/// The neighborhood type decides whether parallel edges merge ([`SetNeighborhood`])
/// or are kept ([`ArrNeighborhood`]). A loop at `u` lists `u` once in its own neighborhood.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph<Nbs> {
    vertices: BTreeMap<Node, Vertex>,
    nbs: BTreeMap<Node, Nbs>,
    payloads: EdgeStore,
    num_edges: NumEdges,
    views: DerivedViews,
}

/// Simple undirected graph: adding an existing edge is a no-op
pub type Graph = UndirectedGraph<SetNeighborhood>;

/// Undirected multigraph: every added edge is a distinct instance
pub type MultiGraph = UndirectedGraph<ArrNeighborhood>;

impl<Nbs: Neighborhood> GraphType for UndirectedGraph<Nbs> {
    type Dir = Undirected;
    const MULTI: bool = Nbs::MULTI;
}

impl<Nbs: Neighborhood> AdjacencyStore for UndirectedGraph<Nbs> {
    type Nbs = Nbs;

    fn vertex_map(&self) -> &BTreeMap<Node, Vertex> {
        &self.vertices
    }

    fn out_map(&self) -> &BTreeMap<Node, Nbs> {
        &self.nbs
    }

    fn in_map(&self) -> Option<&BTreeMap<Node, Nbs>> {
        None
    }

    fn payloads(&self) -> &EdgeStore {
        &self.payloads
    }

    fn views(&self) -> &DerivedViews {
        &self.views
    }

    fn edge_count(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new() -> Self {
        Self::default()
    }
}

impl<Nbs: Neighborhood> GraphVertexEditing for UndirectedGraph<Nbs> {
    fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool {
        self.views.invalidate();
        let vertex: Vertex = vertex.into();
        match self.vertices.entry(vertex.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                self.nbs.insert(vertex.id(), Nbs::default());
                slot.insert(vertex);
                true
            }
        }
    }

    fn remove_vertex(&mut self, u: Node) -> bool {
        self.views.invalidate();
        let Some(nbs) = self.nbs.remove(&u) else {
            return false;
        };
        self.vertices.remove(&u);

        for v in nbs.neighbors().unique() {
            if v != u {
                if let Some(other) = self.nbs.get_mut(&v) {
                    other.remove_neighbors_if(|w| w == u);
                }
            }
            if let Some(parallel) = self.payloads.remove(&Self::pair_key(u, v)) {
                self.num_edges -= parallel.len() as NumEdges;
            }
        }
        true
    }

    fn vertex_mut(&mut self, u: Node) -> Result<&mut Vertex> {
        self.vertices
            .get_mut(&u)
            .ok_or(GraphError::UnknownVertex(u))
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, edge: impl Into<Edge>) -> bool {
        let edge = Into::<Edge>::into(edge).with_orientation(false);
        let (u, v) = edge.endpoints();
        self.add_vertex(u);
        self.add_vertex(v);

        let parallel = self.payloads.entry(edge.key()).or_default();
        if !Nbs::MULTI && !parallel.is_empty() {
            return false;
        }
        parallel.push(edge);

        self.nbs.entry(u).or_default().add_neighbor(v);
        if u != v {
            self.nbs.entry(v).or_default().add_neighbor(u);
        }
        self.num_edges += 1;
        true
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.remove_instance(u, v, |parallel| parallel.len().checked_sub(1))
    }
}

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    /// Removes the first instance between the endpoints of `edge`
    /// whose weight and attributes equal those of `edge`.
    pub fn remove_edge_instance(&mut self, edge: &Edge) -> bool {
        self.remove_instance(edge.start, edge.end, |parallel| {
            parallel
                .iter()
                .position(|e| e.weight == edge.weight && e.data == edge.data)
        })
    }

    fn remove_instance(
        &mut self,
        u: Node,
        v: Node,
        pick: impl FnOnce(&[Edge]) -> Option<usize>,
    ) -> bool {
        self.views.invalidate();
        let key = Self::pair_key(u, v);
        let Some(parallel) = self.payloads.get_mut(&key) else {
            return false;
        };
        let Some(pos) = pick(parallel.as_slice()) else {
            return false;
        };

        parallel.remove(pos);
        if parallel.is_empty() {
            self.payloads.remove(&key);
        }

        if let Some(nbs) = self.nbs.get_mut(&u) {
            nbs.try_remove_neighbor(v);
        }
        if u != v {
            if let Some(nbs) = self.nbs.get_mut(&v) {
                nbs.try_remove_neighbor(u);
            }
        }
        self.num_edges -= 1;
        true
    }
}

impl<Nbs: Neighborhood> PartialEq for UndirectedGraph<Nbs> {
    /// Structural equality: same vertex ids and same (multi-)set of edges.
    /// Attributes, weights and cache states are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.num_edges == other.num_edges
            && self.nbs.len() == other.nbs.len()
            && self
                .nbs
                .iter()
                .zip(other.nbs.iter())
                .all(|((u, a), (v, b))| u == v && a.same_neighbors(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_graph_merges_parallel_edges() {
        let mut graph = Graph::new();
        assert!(graph.add_edge((1, 2)));
        assert!(!graph.add_edge((2, 1)));
        assert!(graph.add_edge((2, 2)));

        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(2), Ok(2));
        assert_eq!(graph.neighbors_of(2).unwrap().collect_vec(), vec![1, 2]);
        assert!(graph.has_edge(2, 1));
        assert!(graph.has_self_loop(2));
    }

    #[test]
    fn multigraph_keeps_instances() {
        let mut graph = MultiGraph::new();
        graph.add_edge(Edge::new(1, 2).with_weight(1.0));
        graph.add_edge(Edge::new(2, 1).with_weight(5.0));
        graph.add_edge(Edge::new(3, 3));
        graph.add_edge(Edge::new(3, 3));

        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.degree_of(1), Ok(2));
        assert_eq!(graph.degree_of(3), Ok(2));
        assert_eq!(graph.number_of_loops(), 2);
        assert_eq!(graph.number_of_multiple_edges(), 2);
        assert_eq!(graph.multiplicity(2, 1), 2);
        assert_eq!(graph.min_weight_between(2, 1), Some(1.0));

        // most recent instance goes first
        assert!(graph.remove_edge(1, 2));
        assert_eq!(
            graph.edges_between(1, 2).iter().map(|e| e.weight).collect_vec(),
            vec![1.0]
        );
        assert!(graph.remove_edge_instance(&Edge::new(3, 3)));
        assert!(!graph.remove_edge_instance(&Edge::new(1, 2).with_weight(7.0)));
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn removing_absent_items_is_a_noop() {
        let mut graph = Graph::from_edge_list([(0, 1)]);
        assert!(!graph.remove_edge(0, 5));
        assert!(!graph.remove_edge(7, 8));
        assert!(!graph.remove_vertex(9));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn remove_vertex_drops_incident_edges() {
        let mut graph = MultiGraph::from_edge_list([(0, 1), (0, 1), (1, 2), (1, 1), (2, 0)]);
        assert!(graph.remove_vertex(1));

        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.neighbors_of(0).unwrap().collect_vec(), vec![2]);
        assert_eq!(graph.degree_of(1), Err(GraphError::UnknownVertex(1)));
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn caches_follow_mutations() {
        let mut graph = Graph::from_edge_list([(0, 1), (1, 2)]);
        assert!(!graph.edge_cache().is_valid());

        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.adjacency_matrix().len(), 3);
        assert!(graph.edge_cache().is_valid());
        assert!(graph.matrix_cache().is_valid());

        graph.add_edge((2, 3));
        assert!(!graph.edge_cache().is_valid());
        assert!(!graph.matrix_cache().is_valid());
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.adjacency_matrix().len(), 4);
    }

    #[test]
    fn structural_equality() {
        let a = MultiGraph::from_edge_list([(0, 1), (1, 2), (0, 1)]);
        let b = MultiGraph::from_edge_list([(1, 2), (1, 0), (0, 1)]);
        let c = MultiGraph::from_edge_list([(0, 1), (1, 2)]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let weighted = Graph::from_edge_list([Edge::new(0, 1).with_weight(9.0)]);
        assert_eq!(weighted, Graph::from_edge_list([(1, 0)]));
    }

    #[test]
    fn vertex_data_survives_edge_insertion() {
        let mut graph = Graph::new();
        graph.add_vertex(Vertex::new(4).with_attr("name", "hub"));
        graph.add_edge((4, 5));
        assert!(!graph.add_vertex(4));
        assert_eq!(graph.vertex(4).unwrap().name(), "hub");
        assert_eq!(graph.vertex(5).unwrap().name(), "5");
        assert_eq!(graph.vertex(6).unwrap_err(), GraphError::UnknownVertex(6));

        graph.vertex_mut(5).unwrap().set("name", "leaf");
        assert_eq!(graph.vertex(5).unwrap().name(), "leaf");
    }
}

test_graph_ops!(
    test_simple_graph,
    Graph,
    true,
    false,
    (GraphNew, AdjacencyList, GraphEdgeEditing, CachedViews)
);

test_graph_ops!(
    test_multi_graph,
    MultiGraph,
    true,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, CachedViews)
);
