/*!
# Errors

Every fallible operation of the crate reports a [`GraphError`].
Absent-item *removals* are not errors: they are silent no-ops that return `false`.
*/

use thiserror::Error;

use crate::{Node, NumNodes};

/// Errors raised by graph construction, queries, algorithms and generators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge was described without one of its endpoints
    #[error("an edge requires a start and an end vertex")]
    MissingEndpoint,

    /// An edge was described by more than two endpoints
    #[error("an edge takes exactly two endpoints, but {found} were given")]
    TooManyEndpoints { found: usize },

    /// A query referenced a vertex that is not part of the graph
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(Node),

    /// Kahn's algorithm could not order every vertex
    #[error("graph contains a cycle: only {ordered} of {vertices} vertices could be ordered")]
    CycleDetected { ordered: usize, vertices: usize },

    /// Degree/weight sequences must have an even sum to be realisable by half-edges
    #[error("sum of the degree sequence must be even, but is {0}")]
    OddDegreeSum(u64),

    /// Watts-Strogatz splits the mean degree evenly to both sides of the ring
    #[error("mean degree must be even, but is {0}")]
    OddMeanDegree(NumNodes),

    /// The spanning tree algorithm was selected by an unknown name
    #[error("unknown spanning tree algorithm `{0}`, expected `prim` or `kruskal`")]
    UnknownMstAlgorithm(String),

    /// A generator or parser received a parameter outside its domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// [`Edge::other`](crate::edge::Edge::other) was asked for the far end of a non-incident vertex
    #[error("vertex {vertex} is not an endpoint of edge ({},{})", edge.0, edge.1)]
    NotIncident { vertex: Node, edge: (Node, Node) },
}

/// Shorthand used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

impl From<GraphError> for std::io::Error {
    /// Graph-level failures while reading or writing text formats are invalid data
    fn from(err: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}
