/*!
# Subgraph Algorithms

Vertex-induced subgraphs and renumbering to a dense `0..n` id range.
Both copy vertex attributes and every edge instance with its weight and attributes.
*/

use super::*;

/// A trait for deriving new graphs of the same kind from a graph
pub trait Subgraph: Sized {
    /// Creates the **vertex-induced subgraph** on `vertices`: these vertices (ids unchanged)
    /// and all edge instances with both endpoints among them. Unknown ids are ignored.
    fn vertex_induced(&self, vertices: impl IntoIterator<Item = Node>) -> Self;

    /// Relabels the vertices to `0..n` in ascending id order.
    /// Returns the new graph and the old id of every new id.
    fn renumbered(&self) -> (Self, Vec<Node>);

    /// Like [`Subgraph::renumbered`] without the mapping
    fn renumber(&self) -> Self {
        self.renumbered().0
    }
}

impl<G> Subgraph for G
where
    G: GraphFromScratch + IncidenceList,
{
    fn vertex_induced(&self, vertices: impl IntoIterator<Item = Node>) -> Self {
        let keep: FxHashSet<Node> = vertices
            .into_iter()
            .filter(|&u| self.has_vertex(u))
            .collect();

        Self::from_edges(
            self.vertices_with_data().filter(|v| keep.contains(&v.id())),
            self.edges()
                .iter()
                .filter(|e| keep.contains(&e.start) && keep.contains(&e.end)),
        )
    }

    fn renumbered(&self) -> (Self, Vec<Node>) {
        let old_ids = self.vertices().collect_vec();
        let new_id: FxHashMap<Node, Node> = old_ids
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new as Node))
            .collect();

        let graph = Self::from_edges(
            self.vertices_with_data()
                .map(|v| v.relabeled(new_id[&v.id()])),
            self.edges().iter().map(|e| Edge {
                start: new_id[&e.start],
                end: new_id[&e.end],
                ..e.clone()
            }),
        );
        (graph, old_ids)
    }
}
