//! # EdgeList
//!
//! The EdgeList-Format consists of non-comment-lines `u v [w]`, each representing one edge
//! instance `(u, v)` with optional weight `w`. There is no header: the vertex set is
//! implied by the endpoints.

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: DEFAULT_COMMENT.to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Parses all edges of the reader
    pub fn try_read_edges<R: BufRead>(&self, reader: R) -> Result<Vec<Edge>> {
        DataLines::new(reader, &self.comment_identifier)
            .map(|line| parse_edge_line(&line?))
            .collect()
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        Ok(G::from_edge_list(self.try_read_edges(reader)?))
    }
}

/// Tries to parse an edge from a data line
fn parse_edge_line(line: &str) -> Result<Edge> {
    let mut parts = line.split_whitespace();

    let from: Node = parse_next_value!(parts, "Source node");
    let dest: Node = parse_next_value!(parts, "Target node");

    let mut edge = Edge::new(from, dest);
    if parts.clone().next().is_some() {
        edge.weight = parse_next_value!(parts, "Edge weight");
    }

    raise_error_unless!(
        parts.next().is_none(),
        ErrorKind::InvalidData,
        format!("Too many values in edge line `{line}`")
    );

    Ok(edge)
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Append the weight of every edge as third value
    weights: bool,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Write weights as a third column
    pub fn weights(mut self, weights: bool) -> EdgeListWriter {
        self.weights = weights;
        self
    }
}

impl<G: IncidenceList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for edge in graph.edges() {
            if self.weights {
                writeln!(writer, "{} {} {}", edge.start, edge.end, edge.weight)?;
            } else {
                writeln!(writer, "{} {}", edge.start, edge.end)?;
            }
        }

        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: IncidenceList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_kept() {
        let graph = Graph::from_edge_list([(0, 1, 2.5), (1, 7, 1.0), (7, 7, 0.25)]);

        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .weights(true)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "0 1 2.5\n1 7 1\n7 7 0.25\n"
        );

        let read = Graph::try_read_edge_list(buffer.as_slice()).unwrap();
        assert_eq!(read, graph);
        assert_eq!(read.min_weight_between(1, 0), Some(2.5));
        assert_eq!(read.min_weight_between(7, 7), Some(0.25));
    }

    #[test]
    fn parallel_edges_in_multigraphs() {
        let input = "0 1\n1 0\n0 1 3\n";
        let multi = MultiGraph::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(multi.number_of_edges(), 3);

        let simple = Graph::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(simple.number_of_edges(), 1);

        let oriented = OrientedGraph::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(oriented.number_of_edges(), 2);
    }

    #[test]
    fn malformed_lines() {
        for input in ["0\n", "0 x\n", "0 1 2 3\n", "-1 2\n", "0 1 heavy\n"] {
            let err = Graph::try_read_edge_list(input.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{input:?}");
        }
        assert!(Graph::try_read_edge_list("".as_bytes()).unwrap().is_empty());
    }
}
