//! # AdjacencyMatrix
//!
//! `n` non-comment-lines of `n` numbers each. Entry `(i, j)` is the number of instances for
//! multigraphs and the edge weight otherwise; `0` denotes a missing edge. Rows and columns refer
//! to the vertices in ascending id order, so a graph over ids other than `0..n` is renumbered.
//!
//! Writing a simple graph fails if an edge weight is zero, negative or not finite, as such an
//! entry would be read back as a missing edge or rejected.

use super::*;

/// A GraphReader for the AdjacencyMatrix-Format
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for AdjacencyMatrixReader {
    fn default() -> Self {
        Self {
            comment_identifier: DEFAULT_COMMENT.to_string(),
        }
    }
}

impl AdjacencyMatrixReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> AdjacencyMatrixReader {
        self.comment_identifier = c.into();
        self
    }

    /// Parses a square matrix
    pub fn try_read_rows<R: BufRead>(&self, reader: R) -> Result<Vec<Vec<Weight>>> {
        let rows = DataLines::new(reader, &self.comment_identifier)
            .map(|line| {
                line?
                    .split_whitespace()
                    .map(|x| {
                        x.parse::<Weight>().map_err(|_| {
                            io_error!(
                                ErrorKind::InvalidData,
                                format!("Invalid value `{x}` found. Cannot parse matrix entry.")
                            )
                        })
                    })
                    .collect::<Result<Vec<Weight>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            raise_error_unless!(
                row.len() == n,
                ErrorKind::InvalidData,
                format!("Row {i} has {} entries, expected {n}", row.len())
            );
            raise_error_unless!(
                row.iter().all(|x| x.is_finite() && *x >= 0.0),
                ErrorKind::InvalidData,
                format!("Row {i} contains a negative or non-finite entry")
            );
        }

        Ok(rows)
    }
}

impl<G: GraphFromScratch> GraphReader<G> for AdjacencyMatrixReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        Ok(G::from_matrix(&self.try_read_rows(reader)?))
    }
}

/// A writer for the AdjacencyMatrix-Format
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMatrixWriter;

impl AdjacencyMatrixWriter {
    pub fn new() -> Self {
        Self
    }
}

impl<G: IncidenceList> GraphWriter<G> for AdjacencyMatrixWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let matrix = graph.adjacency_matrix();
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                if j > 0 {
                    write!(writer, " ")?;
                }
                let value = matrix.value(i, j);
                raise_error_unless!(
                    matrix.entry(i, j).count == 0 || (value.is_finite() && value > 0.0),
                    ErrorKind::InvalidData,
                    format!(
                        "Edge ({}, {}) has weight {value} which the matrix cannot represent",
                        matrix.vertices()[i],
                        matrix.vertices()[j]
                    )
                );
                write!(writer, "{value}")?;
            }
            writeln!(writer)?;
        }

        writer.flush()
    }
}

/// Shorthand for reading with default settings
pub trait AdjacencyMatrixRead: Sized {
    fn try_read_adjacency_matrix<R: BufRead>(reader: R) -> Result<Self>;

    fn try_read_adjacency_matrix_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_adjacency_matrix(BufReader::new(File::open(path)?))
    }
}

impl<G: GraphFromScratch> AdjacencyMatrixRead for G {
    fn try_read_adjacency_matrix<R: BufRead>(reader: R) -> Result<Self> {
        AdjacencyMatrixReader::default().try_read_graph(reader)
    }
}

/// Shorthand for writing with default settings
pub trait AdjacencyMatrixWrite {
    fn try_write_adjacency_matrix<W: Write>(&self, writer: W) -> Result<()>;

    fn try_write_adjacency_matrix_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_adjacency_matrix(BufWriter::new(File::create(path)?))
    }
}

impl<G: IncidenceList> AdjacencyMatrixWrite for G {
    fn try_write_adjacency_matrix<W: Write>(&self, writer: W) -> Result<()> {
        AdjacencyMatrixWriter.try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_and_counts() {
        let input = "0 2.5 0\n2.5 0 1\n0 1 3\n";

        let graph = Graph::try_read_adjacency_matrix(input.as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.min_weight_between(0, 1), Some(2.5));
        assert_eq!(graph.min_weight_between(2, 2), Some(3.0));

        let multi = MultiGraph::try_read_adjacency_matrix(input.as_bytes()).unwrap();
        // 2.5 rounds to 3 instances
        assert_eq!(multi.multiplicity(0, 1), 3);
        assert_eq!(multi.multiplicity(2, 2), 3);
        assert_eq!(multi.number_of_edges(), 7);
    }

    #[test]
    fn writes_values() {
        let multi = MultiGraph::from_edge_list([(0, 1), (1, 0), (1, 1)]);
        let mut buffer = Vec::new();
        multi.try_write_adjacency_matrix(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0 2\n2 1\n");

        let oriented = OrientedGraph::from_edge_list([(0, 1, 0.5)]);
        let mut buffer = Vec::new();
        oriented.try_write_adjacency_matrix(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0 0.5\n0 0\n");
    }

    #[test]
    fn unrepresentable_weights_are_not_written() {
        for weight in [0.0, -2.0, Weight::INFINITY] {
            let graph = Graph::from_edge_list([(0, 1, 1.0), (1, 2, weight)]);
            let err = graph.try_write_adjacency_matrix(Vec::<u8>::new()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{weight}");
        }

        // multigraphs write counts, so the weight does not matter
        let multi = MultiGraph::from_edge_list([(0, 1, 0.0)]);
        let mut buffer = Vec::new();
        multi.try_write_adjacency_matrix(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0 1\n1 0\n");
    }

    #[test]
    fn rejects_malformed_matrices() {
        for input in ["0 1\n1\n", "0 1 0\n1 0 0\n", "0 x\nx 0\n", "0 -1\n-1 0\n"] {
            let err = Graph::try_read_adjacency_matrix(input.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{input:?}");
        }
    }
}
