use fxhash::FxHashMap;

use super::*;

/// One cell of an [`AdjacencyMatrix`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatrixEntry {
    /// Number of edge instances between the pair
    pub count: NumEdges,
    /// Smallest weight among these instances; `0` if there are none
    pub weight: Weight,
}

impl MatrixEntry {
    fn push(&mut self, weight: Weight) {
        self.weight = if self.count == 0 {
            weight
        } else {
            self.weight.min(weight)
        };
        self.count += 1;
    }
}

/// Dense `n x n` matrix over the vertices of a graph in ascending id order.
///
/// Undirected edges fill both `(i, j)` and `(j, i)`; a loop is counted once on the diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    vertices: Vec<Node>,
    index: FxHashMap<Node, usize>,
    entries: Vec<MatrixEntry>,
    multi: bool,
}

impl AdjacencyMatrix {
    pub(crate) fn build(vertices: Vec<Node>, edges: &[Edge], multi: bool) -> Self {
        let n = vertices.len();
        let index: FxHashMap<Node, usize> =
            vertices.iter().enumerate().map(|(i, &u)| (u, i)).collect();
        let mut entries = vec![MatrixEntry::default(); n * n];

        for edge in edges {
            let (Some(&i), Some(&j)) = (index.get(&edge.start), index.get(&edge.end)) else {
                continue;
            };
            entries[i * n + j].push(edge.weight);
            if !edge.oriented && i != j {
                entries[j * n + i].push(edge.weight);
            }
        }

        Self {
            vertices,
            index,
            entries,
            multi,
        }
    }

    /// Number of rows (and columns)
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

    /// Row of vertex `u`
    pub fn index_of(&self, u: Node) -> Option<usize> {
        self.index.get(&u).copied()
    }

    /// ** Panics if `i` or `j` are out of bounds **
    pub fn entry(&self, i: usize, j: usize) -> MatrixEntry {
        assert!(i < self.len() && j < self.len());
        self.entries[i * self.len() + j]
    }

    /// The edge count for multigraphs, the weight otherwise
    pub fn value(&self, i: usize, j: usize) -> Weight {
        let entry = self.entry(i, j);
        if self.multi {
            entry.count as Weight
        } else {
            entry.weight
        }
    }

    /// Looks up the entry by vertex ids
    pub fn entry_between(&self, u: Node, v: Node) -> Option<MatrixEntry> {
        Some(self.entry(self.index_of(u)?, self.index_of(v)?))
    }

    /// All rows as vectors of [`AdjacencyMatrix::value`]
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        (0..self.len())
            .map(|i| (0..self.len()).map(|j| self.value(i, j)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_entries() {
        let edges = [
            Edge::new(1, 5).with_weight(2.0),
            Edge::new(5, 1).with_weight(0.5),
            Edge::new(9, 9),
        ];
        let matrix = AdjacencyMatrix::build(vec![1, 5, 9], &edges, true);

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.index_of(9), Some(2));
        assert_eq!(
            matrix.entry(0, 1),
            MatrixEntry {
                count: 2,
                weight: 0.5
            }
        );
        assert_eq!(matrix.entry(1, 0), matrix.entry(0, 1));
        assert_eq!(matrix.entry(2, 2).count, 1);
        assert_eq!(matrix.value(0, 1), 2.0);
        assert_eq!(matrix.entry_between(1, 9).map(|e| e.count), Some(0));
        assert_eq!(matrix.entry_between(1, 7), None);
    }

    #[test]
    fn oriented_entries() {
        let edges = [Edge::oriented(0, 1).with_weight(3.0)];
        let matrix = AdjacencyMatrix::build(vec![0, 1], &edges, false);

        assert_eq!(matrix.value(0, 1), 3.0);
        assert_eq!(matrix.value(1, 0), 0.0);
        assert_eq!(matrix.to_rows(), vec![vec![0.0, 3.0], vec![0.0, 0.0]]);
    }
}
