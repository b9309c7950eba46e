/*!
# Shortest Paths

- Single-pair search with Dijkstra's algorithm, optionally guided by an A* heuristic.
- All-pairs distances with Floyd-Warshall on the adjacency matrix.
- Graph diameter derived from the all-pairs distances.

Edge weights are expected to be non-negative. Parallel edges are reduced to their
cheapest instance. Unreachable pairs have distance `f64::INFINITY`.
*/

use std::collections::BinaryHeap;

use super::*;

/// Result of a single-pair search
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Sum of weights along `path`; infinite if the target is unreachable
    pub distance: Weight,
    /// Vertices from start to target, both included; empty if the target is unreachable
    pub path: Vec<Node>,
}

impl ShortestPath {
    pub fn unreachable() -> Self {
        Self {
            distance: Weight::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Heuristic that turns A* into plain Dijkstra
pub fn zero_heuristic(_: Node, _: Node) -> Weight {
    0.0
}

/// Pairwise distances over the vertices in ascending id order
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    vertices: Vec<Node>,
    dist: Vec<Weight>,
}

impl DistanceMatrix {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex ids in row order
    pub fn vertices(&self) -> &[Node] {
        &self.vertices
    }

    /// ** Panics if `i` or `j` are out of bounds **
    pub fn at(&self, i: usize, j: usize) -> Weight {
        assert!(i < self.len() && j < self.len());
        self.dist[i * self.len() + j]
    }

    /// Distance between two vertex ids; `None` if either is unknown
    pub fn distance(&self, u: Node, v: Node) -> Option<Weight> {
        let i = self.vertices.binary_search(&u).ok()?;
        let j = self.vertices.binary_search(&v).ok()?;
        Some(self.at(i, j))
    }

    /// Largest entry; `0` for an empty matrix
    pub fn max(&self) -> Weight {
        self.dist.iter().copied().fold(0.0, Weight::max)
    }
}

pub trait ShortestPaths: IncidenceList + AdjacencyList {
    /// A* search from `start` to `target`.
    ///
    /// `heuristic(v, target)` must never overestimate the remaining distance,
    /// otherwise the returned path may not be optimal.
    fn shortest_path_with<H>(&self, start: Node, target: Node, heuristic: H) -> Result<ShortestPath>
    where
        H: Fn(Node, Node) -> Weight,
    {
        for u in [start, target] {
            if !self.has_vertex(u) {
                return Err(GraphError::UnknownVertex(u));
            }
        }

        let mut settled: FxHashMap<Node, (Weight, Option<Node>)> = FxHashMap::default();
        let mut tentative: FxHashMap<Node, Weight> = FxHashMap::default();
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        tentative.insert(start, 0.0);
        heap.push(MinScored::new(heuristic(start, target), 0.0, seq, (start, None)));

        while let Some(MinScored {
            tie: dist,
            item: (u, pred),
            ..
        }) = heap.pop()
        {
            if settled.contains_key(&u) {
                continue;
            }
            settled.insert(u, (dist, pred));
            if u == target {
                break;
            }

            for edge in self.edges_of(u)? {
                let v = if edge.start == u { edge.end } else { edge.start };
                if settled.contains_key(&v) {
                    continue;
                }

                let d = dist + edge.weight;
                if tentative.get(&v).is_some_and(|&known| known <= d) {
                    continue;
                }
                tentative.insert(v, d);
                seq += 1;
                heap.push(MinScored::new(d + heuristic(v, target), d, seq, (v, Some(u))));
            }
        }

        let Some(&(distance, _)) = settled.get(&target) else {
            trace!(start, target, "target unreachable");
            return Ok(ShortestPath::unreachable());
        };

        let mut path = vec![target];
        let mut cur = target;
        while let Some(&(_, Some(pred))) = settled.get(&cur) {
            path.push(pred);
            cur = pred;
        }
        path.reverse();

        trace!(start, target, distance, hops = path.len() - 1, "found shortest path");
        Ok(ShortestPath { distance, path })
    }

    /// Dijkstra's algorithm from `start` to `target`
    fn shortest_path(&self, start: Node, target: Node) -> Result<ShortestPath> {
        self.shortest_path_with(start, target, zero_heuristic)
    }

    /// Floyd-Warshall over the adjacency matrix
    fn all_pairs_shortest_paths(&self) -> DistanceMatrix {
        let matrix = self.adjacency_matrix();
        let n = matrix.len();

        let mut dist = vec![Weight::INFINITY; n * n];
        for i in 0..n {
            for j in 0..n {
                let entry = matrix.entry(i, j);
                if entry.count > 0 {
                    dist[i * n + j] = entry.weight;
                }
            }
            dist[i * n + i] = 0.0;
        }

        for k in 0..n {
            for i in 0..n {
                let via = dist[i * n + k];
                if via == Weight::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let candidate = via + dist[k * n + j];
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                    }
                }
            }
        }

        debug!(vertices = n, "computed all pairs shortest paths");
        DistanceMatrix {
            vertices: matrix.vertices().to_vec(),
            dist,
        }
    }

    /// Largest shortest-path distance; infinite if some pair is unreachable,
    /// `0` for graphs with at most one vertex
    fn diameter(&self) -> Weight {
        self.all_pairs_shortest_paths().max()
    }

    /// Diameter of the connected component with the most vertices
    fn biggest_component_diameter(&self) -> Weight
    where
        Self: Connectivity + Subgraph,
    {
        self.largest_connected_component()
            .map_or(0.0, |members| self.vertex_induced(members).diameter())
    }
}

impl<G: IncidenceList + AdjacencyList> ShortestPaths for G {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn grid(width: Node, height: Node) -> Graph {
        let id = |x: Node, y: Node| y * width + x;
        let mut graph = Graph::with_vertices(width * height);
        for y in 0..height {
            for x in 0..width {
                if x + 1 < width {
                    graph.add_edge((id(x, y), id(x + 1, y)));
                }
                if y + 1 < height {
                    graph.add_edge((id(x, y), id(x, y + 1)));
                }
            }
        }
        graph
    }

    #[test]
    fn weighted_path() {
        let graph = Graph::from_edge_list([
            (0, 1, 4.0),
            (0, 2, 1.0),
            (2, 1, 2.0),
            (1, 3, 1.0),
            (2, 3, 5.0),
        ]);
        let result = graph.shortest_path(0, 3).unwrap();
        assert_eq!(result.distance, 4.0);
        assert_eq!(result.path, vec![0, 2, 1, 3]);

        let trivial = graph.shortest_path(2, 2).unwrap();
        assert_eq!(trivial.distance, 0.0);
        assert_eq!(trivial.path, vec![2]);
    }

    #[test]
    fn unreachable_and_unknown() {
        let mut graph = Graph::from_edge_list([(0, 1)]);
        graph.add_vertex(5);

        assert_eq!(graph.shortest_path(0, 5), Ok(ShortestPath::unreachable()));
        assert_eq!(
            graph.shortest_path(0, 7),
            Err(GraphError::UnknownVertex(7))
        );
        assert_eq!(
            graph.shortest_path(8, 0),
            Err(GraphError::UnknownVertex(8))
        );
    }

    #[test]
    fn oriented_paths_follow_orientation() {
        let graph = OrientedGraph::from_edge_list([(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
        assert_eq!(graph.shortest_path(0, 2).unwrap().distance, 2.0);
        assert_eq!(graph.shortest_path(2, 1).unwrap().path, vec![2, 0, 1]);

        let distances = graph.all_pairs_shortest_paths();
        assert_eq!(distances.distance(1, 0), Some(2.0));
        assert_eq!(distances.distance(0, 1), Some(1.0));
    }

    #[test]
    fn manhattan_heuristic_on_grid() {
        let (width, height) = (12, 9);
        let graph = grid(width, height);
        let manhattan =
            |u: Node, v: Node| ((u % width).abs_diff(v % width) + (u / width).abs_diff(v / width)) as Weight;

        let target = width * height - 1;
        let astar = graph.shortest_path_with(0, target, manhattan).unwrap();
        let dijkstra = graph.shortest_path(0, target).unwrap();

        assert_eq!(astar.distance, (width - 1 + height - 1) as Weight);
        assert_eq!(astar.distance, dijkstra.distance);
        assert_eq!(astar.path.len(), (width + height - 1) as usize);
        assert!(astar.path.windows(2).all(|w| graph.has_edge(w[0], w[1])));
    }

    #[test]
    fn floyd_warshall_matches_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xf10d);
        for _ in 0..10 {
            let n = 25u32;
            let edges = (0..60)
                .map(|_| {
                    Edge::new(rng.random_range(0..n), rng.random_range(0..n))
                        .with_weight(rng.random_range(1..10) as Weight)
                })
                .collect_vec();
            let graph = MultiGraph::from_edges(0..n, edges);
            let distances = graph.all_pairs_shortest_paths();

            for (u, v) in (0..n).tuple_combinations() {
                let single = graph.shortest_path(u, v).unwrap();
                assert_eq!(distances.distance(u, v), Some(single.distance));
                assert_eq!(distances.distance(v, u), Some(single.distance));
            }
        }
    }

    #[test]
    fn diameters() {
        assert_eq!(grid(4, 3).diameter(), 5.0);
        assert_eq!(Graph::new().diameter(), 0.0);
        assert_eq!(Graph::with_vertices(1).diameter(), 0.0);

        let mut graph = grid(4, 3);
        graph.add_edge((100, 101));
        assert_eq!(graph.diameter(), Weight::INFINITY);
        assert_eq!(graph.biggest_component_diameter(), 5.0);
    }
}
