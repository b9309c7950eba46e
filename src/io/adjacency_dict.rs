//! # AdjacencyDict
//!
//! One non-comment-line `u v_1 v_2 ...` per vertex listing its neighbors (out-neighbors for
//! oriented graphs). A line with a single id declares an isolated vertex.
//!
//! Undirected graphs list every edge on both sides. Simple graphs also accept one-sided
//! listings; multigraphs only read `v_i >= u` so that every instance is counted once.

use super::*;

/// A GraphReader for the AdjacencyDict-Format
#[derive(Debug, Clone)]
pub struct AdjacencyDictReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for AdjacencyDictReader {
    fn default() -> Self {
        Self {
            comment_identifier: DEFAULT_COMMENT.to_string(),
        }
    }
}

impl AdjacencyDictReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> AdjacencyDictReader {
        self.comment_identifier = c.into();
        self
    }

    /// Parses all `(vertex, neighbors)` rows of the reader
    pub fn try_read_rows<R: BufRead>(&self, reader: R) -> Result<Vec<(Node, Vec<Node>)>> {
        DataLines::new(reader, &self.comment_identifier)
            .map(|line| parse_neighborhood_line(&line?))
            .collect()
    }
}

impl<G: GraphFromScratch> GraphReader<G> for AdjacencyDictReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        Ok(G::from_adjacency(self.try_read_rows(reader)?))
    }
}

fn parse_neighborhood_line(line: &str) -> Result<(Node, Vec<Node>)> {
    let mut parts = line.split_whitespace();
    let u: Node = parse_next_value!(parts, "Vertex");

    let mut neighbors = Vec::new();
    while parts.clone().next().is_some() {
        let v: Node = parse_next_value!(parts, "Neighbor");
        neighbors.push(v);
    }

    Ok((u, neighbors))
}

/// A writer for the AdjacencyDict-Format
#[derive(Debug, Clone, Default)]
pub struct AdjacencyDictWriter;

impl AdjacencyDictWriter {
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for AdjacencyDictWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for u in graph.vertices() {
            write!(writer, "{u}")?;
            for v in graph.neighbors_of(u)? {
                write!(writer, " {v}")?;
            }
            writeln!(writer)?;
        }

        writer.flush()
    }
}

/// Shorthand for reading with default settings
pub trait AdjacencyDictRead: Sized {
    fn try_read_adjacency_dict<R: BufRead>(reader: R) -> Result<Self>;

    fn try_read_adjacency_dict_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_adjacency_dict(BufReader::new(File::open(path)?))
    }
}

impl<G: GraphFromScratch> AdjacencyDictRead for G {
    fn try_read_adjacency_dict<R: BufRead>(reader: R) -> Result<Self> {
        AdjacencyDictReader::default().try_read_graph(reader)
    }
}

/// Shorthand for writing with default settings
pub trait AdjacencyDictWrite {
    fn try_write_adjacency_dict<W: Write>(&self, writer: W) -> Result<()>;

    fn try_write_adjacency_dict_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_adjacency_dict(BufWriter::new(File::create(path)?))
    }
}

impl<G: AdjacencyList> AdjacencyDictWrite for G {
    fn try_write_adjacency_dict<W: Write>(&self, writer: W) -> Result<()> {
        AdjacencyDictWriter.try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_vertices_survive() {
        let mut graph = Graph::from_edge_list([(1, 4), (4, 9)]);
        graph.add_vertex(6);

        let mut buffer = Vec::new();
        graph.try_write_adjacency_dict(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "1 4\n4 1 9\n6\n9 4\n");

        let read = Graph::try_read_adjacency_dict(buffer.as_slice()).unwrap();
        assert_eq!(read, graph);
        assert!(read.has_vertex(6));
    }

    #[test]
    fn one_sided_listings() {
        let input = "0 1 2\n1\n2\n";
        let graph = Graph::try_read_adjacency_dict(input.as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(2, 0));

        let oriented = OrientedGraph::try_read_adjacency_dict(input.as_bytes()).unwrap();
        assert!(oriented.has_edge(0, 2) && !oriented.has_edge(2, 0));
    }

    #[test]
    fn multigraph_counts_each_instance_once() {
        let multi = MultiGraph::from_edge_list([(0, 1), (1, 0), (2, 2), (1, 2)]);

        let mut buffer = Vec::new();
        multi.try_write_adjacency_dict(&mut buffer).unwrap();
        let read = MultiGraph::try_read_adjacency_dict(buffer.as_slice()).unwrap();

        assert_eq!(read, multi);
        assert_eq!(read.multiplicity(0, 1), 2);
        assert_eq!(read.number_of_loops(), 1);
    }

    #[test]
    fn malformed_lines() {
        let err = Graph::try_read_adjacency_dict("0 1 two\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
