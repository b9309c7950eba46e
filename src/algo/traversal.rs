/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Lazy BFS/DFS iterators over the vertices reachable from a start vertex.
- A depth-first *fold*: a [`DfsVisitor`] receives `enter`/`child`/`leave` events and
  combines per-vertex states bottom-up, on an explicit stack so that deep graphs
  cannot overflow the call stack.
- Topological ordering for directed acyclic graphs.
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.
*/

use std::{collections::VecDeque, mem, vec};

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// A vertex is marked visited when it enters the frontier, so every vertex is yielded once.
pub struct TraversalSearch<'a, G, S> {
    graph: &'a G,
    visited: FxHashSet<Node>,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph; neighbors are expanded in reverse order
/// of the adjacency, as they are pushed onto a stack.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        if !graph.has_vertex(start) {
            return Err(GraphError::UnknownVertex(start));
        }

        let mut visited = FxHashSet::default();
        visited.insert(start);
        Ok(Self {
            graph,
            visited,
            sequencer: S::init(start),
        })
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push(x);
                true
            }
        }
    }

    /// Returns *true* if `u` was already discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.contains(&u)
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        if let Ok(neighbors) = self.graph.neighbors_of(u) {
            for v in neighbors {
                if self.visited.insert(v) {
                    self.sequencer.push(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.len() + self.sequencer.cardinality()),
        )
    }
}

/// Callbacks of a depth-first fold.
///
/// Every reached vertex is entered once. When a child finishes, its result is merged
/// into the parent state; when a vertex finishes, its state becomes its result.
pub trait DfsVisitor {
    type State;
    type Output;

    /// Called when `u` is discovered
    fn on_enter(&self, u: Node) -> Self::State;

    /// Called when a tree child of the current vertex has finished
    fn on_child(&self, state: Self::State, child: Self::Output) -> Self::State;

    /// Called when all neighbors of the current vertex have been explored
    fn on_leave(&self, state: Self::State) -> Self::Output;
}

/// A [`DfsVisitor`] assembled from three closures
pub struct Functors<E, C, L> {
    enter: E,
    child: C,
    leave: L,
}

impl<E, C, L> Functors<E, C, L> {
    pub fn new<S, O>(enter: E, child: C, leave: L) -> Self
    where
        E: Fn(Node) -> S,
        C: Fn(S, O) -> S,
        L: Fn(S) -> O,
    {
        Self {
            enter,
            child,
            leave,
        }
    }
}

impl<S, O, E, C, L> DfsVisitor for Functors<E, C, L>
where
    E: Fn(Node) -> S,
    C: Fn(S, O) -> S,
    L: Fn(S) -> O,
{
    type State = S;
    type Output = O;

    fn on_enter(&self, u: Node) -> S {
        (self.enter)(u)
    }

    fn on_child(&self, state: S, child: O) -> S {
        (self.child)(state, child)
    }

    fn on_leave(&self, state: S) -> O {
        (self.leave)(state)
    }
}

/// Counts the vertices reachable from the start
#[derive(Debug, Clone, Copy, Default)]
pub struct CountNodes;

impl DfsVisitor for CountNodes {
    type State = NumNodes;
    type Output = NumNodes;

    fn on_enter(&self, _: Node) -> NumNodes {
        1
    }

    fn on_child(&self, state: NumNodes, child: NumNodes) -> NumNodes {
        state + child
    }

    fn on_leave(&self, state: NumNodes) -> NumNodes {
        state
    }
}

/// Collects the vertices reachable from the start
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectNodes;

impl DfsVisitor for CollectNodes {
    type State = Vec<Node>;
    type Output = Vec<Node>;

    fn on_enter(&self, u: Node) -> Vec<Node> {
        vec![u]
    }

    fn on_child(&self, state: Vec<Node>, child: Vec<Node>) -> Vec<Node> {
        merge_smaller_into_larger(state, child)
    }

    fn on_leave(&self, state: Vec<Node>) -> Vec<Node> {
        state
    }
}

/// Spanning tree discovered by a depth-first search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsTree {
    root: Node,
    edges: Vec<(Node, Node)>,
}

impl DfsTree {
    pub fn root(&self) -> Node {
        self.root
    }

    /// Tree edges as `(parent, child)` pairs
    pub fn edges(&self) -> &[(Node, Node)] {
        &self.edges
    }

    /// Number of vertices in the tree
    pub fn len(&self) -> usize {
        self.edges.len() + 1
    }

    /// A tree always contains its root
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn parent_of(&self, v: Node) -> Option<Node> {
        self.edges.iter().find(|(_, c)| *c == v).map(|(p, _)| *p)
    }

    pub fn children_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges
            .iter()
            .filter(move |(p, _)| *p == u)
            .map(|(_, c)| *c)
    }
}

/// Builds the [`DfsTree`] of the search
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl DfsVisitor for TreeBuilder {
    type State = DfsTree;
    type Output = DfsTree;

    fn on_enter(&self, u: Node) -> DfsTree {
        DfsTree {
            root: u,
            edges: Vec::new(),
        }
    }

    fn on_child(&self, mut state: DfsTree, child: DfsTree) -> DfsTree {
        state.edges.push((state.root, child.root));
        state.edges = merge_smaller_into_larger(state.edges, child.edges);
        state
    }

    fn on_leave(&self, state: DfsTree) -> DfsTree {
        state
    }
}

/// Appending the smaller vector keeps repeated merges along deep paths near-linear
fn merge_smaller_into_larger<T>(mut a: Vec<T>, mut b: Vec<T>) -> Vec<T> {
    if a.len() < b.len() {
        mem::swap(&mut a, &mut b);
    }
    a.append(&mut b);
    a
}

struct Frame<S> {
    state: S,
    pending: vec::IntoIter<Node>,
}

impl<S> Frame<S> {
    fn open<G, V>(graph: &G, visitor: &V, u: Node) -> Self
    where
        G: AdjacencyList,
        V: DfsVisitor<State = S> + ?Sized,
    {
        let pending = graph
            .neighbors_of(u)
            .map(|nbs| nbs.collect_vec())
            .unwrap_or_default();
        Self {
            state: visitor.on_enter(u),
            pending: pending.into_iter(),
        }
    }
}

/// Runs the fold from `start`, skipping and extending `visited`.
/// `start` must be a vertex of `graph`.
pub(crate) fn explore<G, V>(
    graph: &G,
    start: Node,
    visitor: &V,
    visited: &mut FxHashSet<Node>,
) -> V::Output
where
    G: AdjacencyList,
    V: DfsVisitor + ?Sized,
{
    visited.insert(start);
    let mut stack: Vec<Frame<V::State>> = Vec::new();
    let mut frame = Frame::open(graph, visitor, start);

    loop {
        if let Some(v) = frame.pending.find(|v| !visited.contains(v)) {
            visited.insert(v);
            stack.push(mem::replace(&mut frame, Frame::open(graph, visitor, v)));
            continue;
        }

        let result = visitor.on_leave(frame.state);
        let Some(mut parent) = stack.pop() else {
            return result;
        };
        parent.state = visitor.on_child(parent.state, result);
        frame = parent;
    }
}

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses Kahn's algorithm: starts with all vertices of in-degree 0 in ascending order and
/// repeatedly emits one, releasing successors whose in-degree drops to 0.
/// On a cyclic graph the iterator ends early without covering the vertices on or behind cycles.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: FxHashMap<Node, NumNodes>,
    queue: VecDeque<Node>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let in_degs: FxHashMap<Node, NumNodes> = graph
            .vertices()
            .map(|u| (u, graph.in_degree_of(u).unwrap_or(0)))
            .collect();
        let queue = graph.vertices().filter(|u| in_degs[u] == 0).collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        if let Ok(successors) = self.graph.out_neighbors_of(u) {
            for v in successors {
                if let Some(deg) = self.in_degs.get_mut(&v) {
                    *deg -= 1;
                    if *deg == 0 {
                        self.queue.push_back(v);
                    }
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

/// Provides convenient traversal methods (BFS, DFS, depth-first folds)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    fn bfs(&self, start: Node) -> Result<BFS<'_, Self>> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs(&self, start: Node) -> Result<DFS<'_, Self>> {
        DFS::new(self, start)
    }

    /// Folds the depth-first search tree rooted at `start` with `visitor`
    fn depth_first_fold<V: DfsVisitor>(&self, start: Node, visitor: &V) -> Result<V::Output> {
        if !self.has_vertex(start) {
            return Err(GraphError::UnknownVertex(start));
        }
        let mut visited = FxHashSet::default();
        Ok(explore(self, start, visitor, &mut visited))
    }

    /// Number of vertices reachable from `start` (including `start`)
    fn count_reachable(&self, start: Node) -> Result<NumNodes> {
        self.depth_first_fold(start, &CountNodes)
    }

    /// Depth-first spanning tree of the vertices reachable from `start`
    fn dfs_tree(&self, start: Node) -> Result<DfsTree> {
        self.depth_first_fold(start, &TreeBuilder)
    }

    /// Returns *true* if there is a path from `start` to `target`
    fn is_reachable(&self, start: Node, target: Node) -> Result<bool> {
        if !self.has_vertex(target) {
            return Err(GraphError::UnknownVertex(target));
        }
        Ok(self.bfs(start)?.any(|u| u == target))
    }
}

impl<G: AdjacencyList> Traversal for G {}

/// Topological ordering of oriented graphs
pub trait TopologicalSort: DirectedAdjacencyList {
    /// Lazy Kahn iterator; see [`TopoSearch`]
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// All vertices such that every edge points from an earlier to a later vertex
    fn topological_sort(&self) -> Result<Vec<Node>> {
        let order = self.topo_search().collect_vec();
        if order.len() != self.len() {
            debug!(
                ordered = order.len(),
                vertices = self.len(),
                "topological sort hit a cycle"
            );
            return Err(GraphError::CycleDetected {
                ordered: order.len(),
                vertices: self.len(),
            });
        }
        Ok(order)
    }

    /// Returns *true* if the graph has no directed cycle (loops count as cycles)
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }
}

impl<G: DirectedAdjacencyList> TopologicalSort for G {}
