/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use graphtool::algo::*;
```
and gain access to traversal, connectivity, spanning trees, shortest paths and structural metrics.
If possible, algorithms are provided as **iterators** or **traits on the graph itself**, making them
usable without configuring anything beforehand.

Most algorithms build on the traversal engine: a depth-first fold driven by a [`DfsVisitor`],
plus breadth- and depth-first iterators.
*/

mod clustering;
mod connectivity;
mod degree_sequence;
mod mst;
mod shortest_path;
mod subgraph;
mod traversal;
mod union_find;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{error::*, prelude::*, utils::*};

pub use clustering::*;
pub use connectivity::*;
pub use degree_sequence::*;
pub use mst::*;
pub use shortest_path::*;
pub use subgraph::*;
pub use traversal::*;
pub use union_find::*;
