/*!
`graphtool` is a graph data structure & algorithms library for undirected, oriented and
multi-edge graphs whose vertices and edges carry attribute maps.

# Representation

We represent **vertex ids** as `u32`. Ids are sparse: a graph over the vertices `{3, 17, 42}` is
perfectly fine, and iteration always happens in ascending id order.
A [`Vertex`] couples an id with an ordered attribute map; equality, ordering and hashing only look
at the id. An [`Edge`] has two endpoints, an orientation flag, a weight (default `1.0`) and an
attribute map; equality ignores weight and attributes.

### Available Representations

See the [`repr`] module for the storage backends:

- [`Graph`](crate::repr::Graph): undirected, parallel edges are merged
- [`MultiGraph`](crate::repr::MultiGraph): undirected, parallel edges are kept as instances
- [`OrientedGraph`](crate::repr::OrientedGraph): directed, additionally stores in-neighborhoods

All of them share a single adjacency implementation and lazily cache their edge list and
adjacency matrix. Every mutation discards these caches.

# Design

Generators are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before generating edges. Most functionality is implemented via traits
on the graph itself, making it usable without configuring anything beforehand.
Fallible operations return a [`GraphError`](crate::error::GraphError); removing something absent
is a no-op that returns `false`.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, basic graph operations, and all graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start)`),
  connected components, spanning trees, shortest paths and clustering coefficients,
- [`gens`] includes random graph generators and deterministic structures such as paths/cycles/cliques,
- [`io`] includes readers and writers for edge lists, adjacency dicts and adjacency matrices,
- [`utils`] includes small helpers such as probability checks and heap entries.

In most use-cases, `use graphtool::{prelude::*, algo::*, gens::*};` suffices for your needs.

Randomized functions never use a global random source: pass any `rand::Rng` explicitly.
Library code emits `tracing` events and never installs a subscriber.
*/

pub mod algo;
pub mod attr;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use attr::*;
pub use edge::*;
pub use node::*;

/// `graphtool::prelude` includes definitions for vertices and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{attr::*, edge::*, error::GraphError, node::*, ops::*, repr::*};
}
