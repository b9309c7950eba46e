use std::{iter::FusedIterator, vec};

use super::*;

/// Iterator over the connected components of an undirected graph.
///
/// Components are discovered from their smallest vertex id on;
/// every component is returned with its members in ascending order.
pub struct ConnectedComponents<'a, G> {
    graph: &'a G,
    visited: FxHashSet<Node>,
    roots: vec::IntoIter<Node>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            roots: graph.vertices().collect_vec().into_iter(),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.roots.find(|u| !self.visited.contains(u))?;
        let mut members = explore(self.graph, root, &CollectNodes, &mut self.visited);
        members.sort_unstable();
        Some(members)
    }
}

impl<G: AdjacencyList> FusedIterator for ConnectedComponents<'_, G> {}

pub trait Connectivity: AdjacencyList + GraphType<Dir = Undirected> {
    /// Lazily enumerates the vertex sets of all connected components
    fn connected_components_iter(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Vertex sets of all connected components, ordered by their smallest vertex
    fn connected_component_members(&self) -> Vec<Vec<Node>> {
        let components = self.connected_components_iter().collect_vec();
        debug!(components = components.len(), "computed connected components");
        components
    }

    /// Every connected component as an induced subgraph with original ids, attributes and payloads
    fn connected_components(&self) -> Vec<Self>
    where
        Self: Subgraph,
    {
        self.connected_components_iter()
            .map(|members| self.vertex_induced(members))
            .collect()
    }

    fn number_of_connected_components(&self) -> usize {
        self.connected_components_iter().count()
    }

    /// Returns *true* if the graph has at most one connected component
    fn is_connected(&self) -> bool {
        self.connected_components_iter().nth(1).is_none()
    }

    /// Members of a component with the most vertices; the first one in case of ties
    fn largest_connected_component(&self) -> Option<Vec<Node>> {
        self.connected_components_iter()
            .fold(None, |best: Option<Vec<Node>>, c| match best {
                Some(b) if b.len() >= c.len() => Some(b),
                _ => Some(c),
            })
    }
}

impl<G: AdjacencyList + GraphType<Dir = Undirected>> Connectivity for G {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_of_sparse_graph() {
        let mut graph = Graph::from_edge_list([(10, 11), (11, 12), (20, 21), (30, 30)]);
        graph.add_vertex(5);

        assert_eq!(
            graph.connected_component_members(),
            vec![vec![5], vec![10, 11, 12], vec![20, 21], vec![30]]
        );
        assert_eq!(graph.number_of_connected_components(), 4);
        assert!(!graph.is_connected());
        assert_eq!(graph.largest_connected_component(), Some(vec![10, 11, 12]));
    }

    #[test]
    fn components_as_subgraphs() {
        let graph = MultiGraph::from_edge_list([
            Edge::new(0, 1).with_weight(3.0),
            Edge::new(1, 0),
            Edge::new(2, 3),
        ]);
        let components = graph.connected_components();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0].number_of_edges(), 2);
        assert_eq!(components[0].total_weight(), 4.0);
        assert_eq!(components[1].vertices().collect_vec(), vec![2, 3]);
        assert!(components.iter().all(|c| c.is_connected()));
    }

    #[test]
    fn trivial_graphs_are_connected() {
        assert!(Graph::new().is_connected());
        assert_eq!(Graph::new().number_of_connected_components(), 0);
        assert!(Graph::with_vertices(1).is_connected());
        assert!(!Graph::with_vertices(2).is_connected());
        assert_eq!(Graph::new().largest_connected_component(), None);
    }
}
