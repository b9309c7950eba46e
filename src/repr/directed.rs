use std::collections::btree_map::Entry;

use super::*;
use crate::testing::test_graph_ops;

/// An oriented graph over sparse vertex ids storing both out- and in-neighborhoods.
///
/// Edges `(u, v)` and `(v, u)` are distinct; a loop at `u` appears once in both
/// neighborhoods of `u`.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<Nbs> {
    vertices: BTreeMap<Node, Vertex>,
    out_nbs: BTreeMap<Node, Nbs>,
    in_nbs: BTreeMap<Node, Nbs>,
    payloads: EdgeStore,
    num_edges: NumEdges,
    views: DerivedViews,
}

/// Oriented graph without parallel edges
pub type OrientedGraph = DirectedGraph<SetNeighborhood>;

impl<Nbs: Neighborhood> GraphType for DirectedGraph<Nbs> {
    type Dir = Directed;
    const MULTI: bool = Nbs::MULTI;
}

impl<Nbs: Neighborhood> AdjacencyStore for DirectedGraph<Nbs> {
    type Nbs = Nbs;

    fn vertex_map(&self) -> &BTreeMap<Node, Vertex> {
        &self.vertices
    }

    fn out_map(&self) -> &BTreeMap<Node, Nbs> {
        &self.out_nbs
    }

    fn in_map(&self) -> Option<&BTreeMap<Node, Nbs>> {
        Some(&self.in_nbs)
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

impl<Nbs: Neighborhood> DirectedAdjacencyList for DirectedGraph<Nbs> {
    fn in_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        self.in_nbs
            .get(&u)
            .map(Neighborhood::neighbors)
            .ok_or(GraphError::UnknownVertex(u))
    }

    fn in_degree_of(&self, u: Node) -> Result<NumNodes> {
        self.in_nbs
            .get(&u)
            .map(Neighborhood::num_of_neighbors)
            .ok_or(GraphError::UnknownVertex(u))
    }
}

impl<Nbs: Neighborhood> GraphNew for DirectedGraph<Nbs> {
    fn new() -> Self {
        Self::default()
    }
}

impl<Nbs: Neighborhood> GraphVertexEditing for DirectedGraph<Nbs> {
    fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool {
        self.views.invalidate();
        let vertex: Vertex = vertex.into();
        match self.vertices.entry(vertex.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                self.out_nbs.insert(vertex.id(), Nbs::default());
                self.in_nbs.insert(vertex.id(), Nbs::default());
                slot.insert(vertex);
                true
            }
        }
    }

    fn remove_vertex(&mut self, u: Node) -> bool {
        self.views.invalidate();
        let (Some(out_nbs), Some(in_nbs)) = (self.out_nbs.remove(&u), self.in_nbs.remove(&u))
        else {
            return false;
        };
        self.vertices.remove(&u);

        for v in out_nbs.neighbors().unique() {
            if let Some(nbs) = self.in_nbs.get_mut(&v) {
                nbs.remove_neighbors_if(|w| w == u);
            }
            if let Some(parallel) = self.payloads.remove(&(u, v)) {
                self.num_edges -= parallel.len() as NumEdges;
            }
        }

        for w in in_nbs.neighbors().unique() {
            if let Some(nbs) = self.out_nbs.get_mut(&w) {
                nbs.remove_neighbors_if(|x| x == u);
            }
            if let Some(parallel) = self.payloads.remove(&(w, u)) {
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

impl<Nbs: Neighborhood> GraphEdgeEditing for DirectedGraph<Nbs> {
    fn add_edge(&mut self, edge: impl Into<Edge>) -> bool {
        let edge = Into::<Edge>::into(edge).with_orientation(true);
        let (u, v) = edge.endpoints();
        self.add_vertex(u);
        self.add_vertex(v);

        let parallel = self.payloads.entry((u, v)).or_default();
        if !Nbs::MULTI && !parallel.is_empty() {
            return false;
        }
        parallel.push(edge);

        self.out_nbs.entry(u).or_default().add_neighbor(v);
        self.in_nbs.entry(v).or_default().add_neighbor(u);
        self.num_edges += 1;
        true
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.views.invalidate();
        let Some(parallel) = self.payloads.get_mut(&(u, v)) else {
            return false;
        };
        if parallel.pop().is_none() {
            return false;
        }
        if parallel.is_empty() {
            self.payloads.remove(&(u, v));
        }

        if let Some(nbs) = self.out_nbs.get_mut(&u) {
            nbs.try_remove_neighbor(v);
        }
        if let Some(nbs) = self.in_nbs.get_mut(&v) {
            nbs.try_remove_neighbor(u);
        }
        self.num_edges -= 1;
        true
    }
}

impl<Nbs: Neighborhood> DirectedGraph<Nbs> {
    /// Edges ending in `u`, every instance once
    pub fn in_edges_of(&self, u: Node) -> Result<impl Iterator<Item = &Edge> + '_> {
        let in_nbs = self.in_nbs.get(&u).ok_or(GraphError::UnknownVertex(u))?;
        Ok(in_nbs
            .neighbors()
            .unique()
            .flat_map(move |v| self.edges_between(v, u).iter()))
    }

    /// Forgets orientation: one undirected edge per connected vertex pair.
    /// Reciprocal pairs keep the payload of the edge starting at the smaller id.
    pub fn symmetrize(&self) -> Graph {
        let mut graph = Graph::new();
        graph.add_vertices(self.vertices_with_data());
        // `edges()` is sorted by (start, end), so the forward edge of a pair is seen first
        graph.add_edges(self.edges().iter().map(|e| e.clone().with_orientation(false)));
        graph
    }
}

impl<Nbs: Neighborhood> PartialEq for DirectedGraph<Nbs> {
    /// Structural equality on vertex ids and oriented edges
    fn eq(&self, other: &Self) -> bool {
        self.num_edges == other.num_edges
            && self.out_nbs.len() == other.out_nbs.len()
            && self
                .out_nbs
                .iter()
                .zip(other.out_nbs.iter())
                .all(|((u, a), (v, b))| u == v && a.same_neighbors(b))
    }
}


test_graph_ops!(
    test_oriented_graph,
    OrientedGraph,
    false,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        CachedViews
    )
);
