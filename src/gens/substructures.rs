/*!
# Substructure Generators

Deterministic constructors of small graphs and utility methods to add common motifs to an
already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

# Example

```rust
use graphtool::{prelude::*, gens::*};

let mut g = Graph::empty(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique(&[0, 2, 4], false);

assert_eq!(g.number_of_edges(), 7);
assert!(g.has_edge(4, 0));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph. Missing vertices are created.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use graphtool::{prelude::*, gens::*};
    ///
    /// let mut g = Graph::new();
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(2, 3));
    /// assert!(!g.has_edge(3, 0));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected by edges and
    /// the last node is connected back to the first. A single node receives a loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique**.
    ///
    /// - If `with_loops` is `true`, each node also gets a self-loop.
    /// - Directed graphs receive both orientations of every pair.
    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge((u, v));
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge((prev, cur));
                prev = cur;
            }

            self.add_edge((prev, first));
        }
    }

    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool) {
        for (i, &u) in nodes.iter().enumerate() {
            if with_loops {
                self.add_edge((u, u));
            }
            for &v in &nodes[i + 1..] {
                self.add_edge((u, v));
                if Self::is_directed() {
                    self.add_edge((v, u));
                }
            }
        }
    }
}

/// Constructors of deterministic graphs on the vertices `0..n`
pub trait StructuredGraph: Sized {
    /// `n` isolated vertices
    fn empty(n: NumNodes) -> Self;

    /// The path `0 - 1 - ... - (n-1)`
    fn path(n: NumNodes) -> Self;

    /// Vertex `i` is connected to `(i + 1) % n`.
    /// For `n = 1` this is a loop, for `n = 2` a simple graph keeps a single edge.
    fn cycle(n: NumNodes) -> Self;

    /// All `n(n-1)/2` pairs are connected (both orientations for directed graphs)
    fn clique(n: NumNodes) -> Self;
}

impl<G> StructuredGraph for G
where
    G: GraphNew + GraphEdgeEditing + GraphType,
{
    fn empty(n: NumNodes) -> Self {
        Self::with_vertices(n)
    }

    fn path(n: NumNodes) -> Self {
        let mut graph = Self::empty(n);
        graph.connect_path(0..n);
        graph
    }

    fn cycle(n: NumNodes) -> Self {
        let mut graph = Self::empty(n);
        graph.connect_cycle(0..n);
        graph
    }

    fn clique(n: NumNodes) -> Self {
        let mut graph = Self::empty(n);
        graph.connect_clique(&(0..n).collect_vec(), false);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = Graph::empty(6);
            g.connect_path([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = Graph::empty(6);
            g.connect_path([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = OrientedGraph::empty(6);
            g.connect_path([2, 1]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(2, 1));
            assert!(!g.has_edge(1, 2));
        }

        {
            let mut g = Graph::new();
            g.connect_path([0, 3, 1, 4]);
            assert_eq!(g.number_of_nodes(), 4);
            assert_eq!(
                g.edges().iter().map(Edge::key).collect_vec(),
                vec![(0, 3), (1, 3), (1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = Graph::empty(6);
            g.connect_cycle([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = Graph::empty(6);
            g.connect_cycle([1]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_self_loop(1));
        }

        {
            let mut g = Graph::empty(6);
            g.connect_cycle([0, 3, 1, 4]);
            assert_eq!(
                g.edges().iter().map(Edge::key).collect_vec(),
                vec![(0, 3), (0, 4), (1, 3), (1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = Graph::empty(6);
            g.connect_clique(&[], true);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = Graph::empty(6);
            g.connect_clique(&[1], false);
            assert_eq!(g.number_of_edges(), 0);
            g.connect_clique(&[1], true);
            assert_eq!(g.number_of_edges(), 1);
        }

        {
            let mut g = Graph::empty(6);
            g.connect_clique(&[1, 2, 4], false);
            assert_eq!(g.number_of_edges(), 3);
        }

        {
            let mut g = OrientedGraph::empty(6);
            g.connect_clique(&[1, 2, 4], true);
            assert_eq!(g.number_of_edges(), 9);
        }
    }

    #[test]
    fn small_structures() {
        assert_eq!(Graph::empty(4).number_of_nodes(), 4);
        assert!(Graph::empty(4).is_edgeless());

        assert_eq!(Graph::path(5).number_of_edges(), 4);
        assert_eq!(Graph::path(1).number_of_edges(), 0);

        assert_eq!(Graph::cycle(5).number_of_edges(), 5);
        assert!(Graph::cycle(5).degrees().all(|d| d == 2));
        assert_eq!(Graph::cycle(2).number_of_edges(), 1);
        assert_eq!(MultiGraph::cycle(2).number_of_edges(), 2);
        assert!(Graph::cycle(1).has_self_loop(0));

        assert_eq!(Graph::clique(6).number_of_edges(), 15);
        assert_eq!(OrientedGraph::clique(4).number_of_edges(), 12);
        assert_eq!(Graph::clique(0).number_of_nodes(), 0);
    }
}
