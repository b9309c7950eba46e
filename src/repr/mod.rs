/*!
# Graph Storage

Three graph kinds share one storage scheme:

- [`Graph`]: undirected, parallel edges merge
- [`MultiGraph`]: undirected, parallel edges are kept as distinct instances
- [`OrientedGraph`]: edges are ordered pairs, in- and out-adjacency are both stored

Vertices live in an ordered map keyed by id, so iteration is always in ascending id order.
Every edge instance keeps its weight and attributes in a payload store keyed by the
indexing pair of the edge (see [`Edge::key`]).

The edge list and the [`AdjacencyMatrix`] are derived views that are built lazily
and invalidated by every mutating call.
*/

use std::collections::BTreeMap;

use fxhash::FxHashMap;
use itertools::Itertools;
use smallvec::SmallVec;
use tracing::trace;

use crate::{error::*, ops::*, *};

mod cache;
mod directed;
mod matrix;
mod neighborhood;
mod undirected;

pub use cache::*;
pub use directed::*;
pub use matrix::*;
pub use neighborhood::*;
pub use undirected::*;

/// Edge instances per indexing pair, in insertion order
pub(crate) type EdgeStore = FxHashMap<(Node, Node), SmallVec<[Edge; 1]>>;

mod store {
    use super::*;

    /// Read access to the common storage layout.
    /// All public read traits are implemented on top of this.
    pub trait AdjacencyStore: GraphType + Sized {
        type Nbs: Neighborhood;

        fn vertex_map(&self) -> &BTreeMap<Node, Vertex>;

        /// Outgoing (or undirected) adjacency
        fn out_map(&self) -> &BTreeMap<Node, Self::Nbs>;

        /// Incoming adjacency; `None` for undirected storage
        fn in_map(&self) -> Option<&BTreeMap<Node, Self::Nbs>>;

        fn payloads(&self) -> &EdgeStore;

        fn views(&self) -> &DerivedViews;

        fn edge_count(&self) -> NumEdges;

        fn pair_key(u: Node, v: Node) -> (Node, Node) {
            if Self::is_directed() {
                (u, v)
            } else {
                (u.min(v), u.max(v))
            }
        }
    }
}

pub(crate) use store::AdjacencyStore;

impl<G: AdjacencyStore> GraphNodeOrder for G {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertex_map().len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertex_map().keys().copied()
    }

    fn vertices_with_data(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertex_map().values()
    }

    fn vertex(&self, u: Node) -> Result<&Vertex> {
        self.vertex_map().get(&u).ok_or(GraphError::UnknownVertex(u))
    }

    fn has_vertex(&self, u: Node) -> bool {
        self.vertex_map().contains_key(&u)
    }
}

impl<G: AdjacencyStore> GraphEdgeOrder for G {
    fn number_of_edges(&self) -> NumEdges {
        self.edge_count()
    }
}

impl<G: AdjacencyStore> AdjacencyList for G {
    fn neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        self.out_map()
            .get(&u)
            .map(Neighborhood::neighbors)
            .ok_or(GraphError::UnknownVertex(u))
    }

    fn degree_of(&self, u: Node) -> Result<NumNodes> {
        self.out_map()
            .get(&u)
            .map(Neighborhood::num_of_neighbors)
            .ok_or(GraphError::UnknownVertex(u))
    }

    fn isolated_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.out_map()
            .iter()
            .filter(|(u, nbs)| {
                nbs.num_of_neighbors() == 0
                    && self
                        .in_map()
                        .and_then(|m| m.get(*u))
                        .is_none_or(|nbs| nbs.num_of_neighbors() == 0)
            })
            .map(|(&u, _)| u)
    }
}

impl<G: AdjacencyStore> AdjacencyTest for G {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_map().get(&u).is_some_and(|nbs| nbs.has_neighbor(v))
    }
}

impl<G: AdjacencyStore> IncidenceList for G {
    fn edges(&self) -> &[Edge] {
        self.views().edges.get_or_build(|| {
            let mut edges = Vec::with_capacity(self.edge_count() as usize);
            for (&u, nbs) in self.out_map() {
                for v in nbs.neighbors().sorted_unstable().dedup() {
                    if Self::is_undirected() && v < u {
                        continue;
                    }
                    edges.extend(self.edges_between(u, v).iter().cloned());
                }
            }
            trace!(edges = edges.len(), "rebuilt edge list");
            edges
        })
    }

    fn edges_of(&self, u: Node) -> Result<impl Iterator<Item = &Edge> + '_> {
        let nbs = self.out_map().get(&u).ok_or(GraphError::UnknownVertex(u))?;
        Ok(nbs
            .neighbors()
            .sorted_unstable()
            .dedup()
            .flat_map(move |v| self.edges_between(u, v).iter()))
    }

    fn edges_between(&self, u: Node, v: Node) -> &[Edge] {
        self.payloads()
            .get(&Self::pair_key(u, v))
            .map_or(&[], |parallel| parallel.as_slice())
    }

    fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        self.views().matrix.get_or_build(|| {
            let matrix =
                AdjacencyMatrix::build(self.vertices().collect(), self.edges(), Self::is_multi());
            trace!(rows = matrix.len(), "rebuilt adjacency matrix");
            matrix
        })
    }
}

impl<G: AdjacencyStore> CachedViews for G {
    fn edge_cache(&self) -> CacheState<'_, Vec<Edge>> {
        self.views().edges.state()
    }

    fn matrix_cache(&self) -> CacheState<'_, AdjacencyMatrix> {
        self.views().matrix.state()
    }
}

/// Counts loops and surplus parallel instances from the edge list
pub trait EdgeMultiplicity: IncidenceList {
    /// Number of self-loop instances
    fn number_of_loops(&self) -> NumEdges {
        self.edges().iter().filter(|e| e.is_loop()).count() as NumEdges
    }

    /// Number of instances beyond the first per vertex pair
    fn number_of_multiple_edges(&self) -> NumEdges {
        self.edges()
            .iter()
            .map(Edge::key)
            .dedup_with_count()
            .map(|(count, _)| count as NumEdges - 1)
            .sum()
    }

    /// Number of instances connecting `u` and `v`
    fn multiplicity(&self, u: Node, v: Node) -> NumEdges {
        self.edges_between(u, v).len() as NumEdges
    }
}

impl<G: IncidenceList> EdgeMultiplicity for G {}
