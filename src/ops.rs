use itertools::Itertools;

use crate::{error::*, repr::AdjacencyMatrix, *};

/// Marker for the orientation of a graph type
pub trait Direction {
    const DIRECTED: bool;
}

/// Edges are ordered pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Edges are unordered pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl Direction for Directed {
    const DIRECTED: bool = true;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
}

/// Static properties of a graph type
pub trait GraphType {
    type Dir: Direction;

    /// Whether parallel edges are kept as distinct instances
    const MULTI: bool;

    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    fn is_undirected() -> bool {
        !Self::is_directed()
    }

    fn is_multi() -> bool {
        Self::MULTI
    }
}

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphNodeOrder {
    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all vertex ids in ascending order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over all vertices including their attributes in ascending id order
    fn vertices_with_data(&self) -> impl Iterator<Item = &Vertex> + '_;

    /// Returns the vertex with the given id
    fn vertex(&self, u: Node) -> Result<&Vertex>;

    /// Returns *true* if `u` is a vertex of the graph
    fn has_vertex(&self, u: Node) -> bool;
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph; parallel edges count individually
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges.
///
/// For oriented graphs, neighbors and degrees refer to *outgoing* edges.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex.
    /// In multigraphs a neighbor appears once per parallel edge, a loop contributes `u` once.
    fn neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_>;

    /// Returns the number of neighbors of `u` (counting multiplicities)
    fn degree_of(&self, u: Node) -> Result<NumNodes>;

    /// Returns the vertices without any incident edge
    fn isolated_vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns the degrees of all vertices in ascending id order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u).unwrap_or(0))
    }

    /// Returns all degrees sorted in non-increasing order
    fn degree_sequence(&self) -> Vec<NumNodes> {
        let mut seq = self.degrees().collect_vec();
        seq.sort_unstable_by(|a, b| b.cmp(a));
        seq
    }

    /// Returns a distribution sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }
}

/// Getters for the reverse adjacency of oriented graphs
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over the in-neighbors of a given vertex
    fn in_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_>;

    /// Returns the number of in-neighbors of `u`
    fn in_degree_of(&self, u: Node) -> Result<NumNodes>;

    /// Alias of [`AdjacencyList::neighbors_of`]
    fn out_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        self.neighbors_of(u)
    }

    /// Alias of [`AdjacencyList::degree_of`]
    fn out_degree_of(&self, u: Node) -> Result<NumNodes> {
        self.degree_of(u)
    }

    /// Returns the sum of in- and out-degree of `u`
    fn total_degree_of(&self, u: Node) -> Result<NumNodes> {
        Ok(self.in_degree_of(u)? + self.out_degree_of(u)?)
    }

    /// Vertices without incoming edges
    fn sources(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices()
            .filter(|&u| self.in_degree_of(u).is_ok_and(|d| d == 0))
    }

    /// Vertices without outgoing edges
    fn sinks(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices()
            .filter(|&u| self.out_degree_of(u).is_ok_and(|d| d == 0))
    }
}

/// Trait for testing the existence of edges
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `(u, v)` exists; `false` if either vertex is unknown
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if `u` has a self-loop
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Access to the stored edge instances including weights and attributes.
///
/// The edge list and the adjacency matrix are derived views:
/// they are built on first access and dropped by every mutation.
pub trait IncidenceList: GraphNodeOrder + GraphEdgeOrder + GraphType {
    /// All edge instances, sorted by their indexing pair.
    /// Undirected edges are listed once, parallel edges once per instance.
    fn edges(&self) -> &[Edge];

    /// Edges leaving `u` (oriented) or incident to `u` (undirected), every instance once
    fn edges_of(&self, u: Node) -> Result<impl Iterator<Item = &Edge> + '_>;

    /// All instances connecting `u` to `v`
    fn edges_between(&self, u: Node, v: Node) -> &[Edge];

    /// The first stored instance connecting `u` to `v`
    fn edge(&self, u: Node, v: Node) -> Option<&Edge> {
        self.edges_between(u, v).first()
    }

    /// Returns the adjacency matrix over the vertices in ascending id order
    fn adjacency_matrix(&self) -> &AdjacencyMatrix;

    /// Smallest weight among the instances connecting `u` to `v`
    fn min_weight_between(&self, u: Node, v: Node) -> Option<Weight> {
        self.edges_between(u, v)
            .iter()
            .map(|e| e.weight)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Sum of all edge weights
    fn total_weight(&self) -> Weight {
        self.edges().iter().map(|e| e.weight).sum()
    }

    /// Ratio of edges to possible vertex pairs; `0` for graphs with less than two vertices
    fn density(&self) -> f64 {
        let n = self.number_of_nodes() as f64;
        if n <= 1.0 {
            return 0.0;
        }

        let pairs = if Self::is_directed() {
            n * (n - 1.0)
        } else {
            n * (n - 1.0) / 2.0
        };
        self.number_of_edges() as f64 / pairs
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph
    fn new() -> Self;

    /// Creates a graph with vertices `0..n` and no edges
    fn with_vertices(n: NumNodes) -> Self
    where
        Self: GraphVertexEditing,
    {
        let mut graph = Self::new();
        graph.add_vertices(0..n);
        graph
    }
}

/// Adding and removing vertices
pub trait GraphVertexEditing {
    /// Adds a vertex. Returns *true* if it was not present before.
    /// An existing vertex keeps its attributes.
    fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool;

    /// Adds all given vertices
    fn add_vertices(&mut self, vertices: impl IntoIterator<Item = impl Into<Vertex>>) {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Removes the vertex and all incident edges. Returns *false* if `u` was unknown.
    fn remove_vertex(&mut self, u: Node) -> bool;

    /// Mutable access to the attributes of a vertex
    fn vertex_mut(&mut self, u: Node) -> Result<&mut Vertex>;
}

/// Adding and removing edges. Missing endpoints are created on insertion.
pub trait GraphEdgeEditing: GraphVertexEditing {
    /// Adds an edge and returns *true* if the edge set changed.
    /// Simple graphs ignore an edge that is already present, multigraphs always add an instance.
    fn add_edge(&mut self, edge: impl Into<Edge>) -> bool;

    /// Adds all edges of an iterator
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for e in edges {
            self.add_edge(e);
        }
    }

    /// Removes one instance of `(u, v)`. Returns *false* if no such edge exists.
    fn remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Removes one instance per given pair
    fn remove_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for e in edges {
            let e: Edge = e.into();
            self.remove_edge(e.start, e.end);
        }
    }
}

/// A super trait for creating a graph from materialized vertex, edge or adjacency data
pub trait GraphFromScratch: Sized {
    /// Create a graph from vertices and edges; edge endpoints are added implicitly
    fn from_edges<V, E>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Self
    where
        V: Into<Vertex>,
        E: Into<Edge>;

    /// Create a graph from edges only
    fn from_edge_list<E: Into<Edge>>(edges: impl IntoIterator<Item = E>) -> Self {
        Self::from_edges(std::iter::empty::<Node>(), edges)
    }

    /// Create a graph from `(vertex, neighbors)` pairs.
    ///
    /// Undirected multigraphs expect every edge on both sides and only read `v >= u`;
    /// all other graphs accept one-sided listings.
    fn from_adjacency<N>(adjacency: impl IntoIterator<Item = (Node, N)>) -> Self
    where
        N: IntoIterator<Item = Node>;

    /// Create a graph on vertices `0..rows.len()` from a square matrix.
    /// Multigraphs read entries as edge counts, simple graphs as weights; zero means no edge.
    /// Undirected graphs only read the upper triangle including the diagonal.
    fn from_matrix(rows: &[Vec<Weight>]) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing + GraphType> GraphFromScratch for G {
    fn from_edges<V, E>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Self
    where
        V: Into<Vertex>,
        E: Into<Edge>,
    {
        let mut graph = Self::new();
        graph.add_vertices(vertices);
        graph.add_edges(edges);
        graph
    }

    fn from_adjacency<N>(adjacency: impl IntoIterator<Item = (Node, N)>) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        let one_sided = Self::is_directed() || !Self::is_multi();

        let mut graph = Self::new();
        for (u, neighbors) in adjacency {
            graph.add_vertex(u);
            for v in neighbors {
                if one_sided || v >= u {
                    graph.add_edge((u, v));
                }
            }
        }
        graph
    }

    fn from_matrix(rows: &[Vec<Weight>]) -> Self {
        let n = rows.len();
        let mut graph = Self::with_vertices(n as NumNodes);

        for (i, row) in rows.iter().enumerate() {
            let first = if Self::is_directed() { 0 } else { i };
            for (j, &x) in row.iter().enumerate().take(n).skip(first) {
                if x == 0.0 {
                    continue;
                }

                let edge = Edge::new(i as Node, j as Node);
                if Self::is_multi() {
                    for _ in 0..x.round().max(0.0) as u64 {
                        graph.add_edge(edge.clone());
                    }
                } else {
                    graph.add_edge(edge.with_weight(x));
                }
            }
        }
        graph
    }
}
