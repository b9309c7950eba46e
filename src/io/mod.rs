/*!
# IO

Utilities for reading and writing graphs from and to whitespace-separated text formats.

## Formats

- **EdgeList**: one line `<start> <end> [weight]` per edge instance.
  Isolated vertices cannot be expressed and are lost.
- **AdjacencyDict**: one line `<vertex> <neighbor>*` per vertex. Undirected graphs list every edge
  on both sides, oriented graphs list out-neighbors.
- **AdjacencyMatrix**: `n` lines of `n` numbers over the vertices in ascending id order.
  Entries are edge counts for multigraphs and weights otherwise; `0` means no edge.
  Reading always yields the vertices `0..n`.

Blank lines and lines starting with the comment identifier (`#` by default) are skipped.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

pub mod adjacency_dict;
pub mod adjacency_matrix;
pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use adjacency_dict::*;
pub use adjacency_matrix::*;
pub use edge_list::*;

/// Default prefix of lines that are skipped when reading
pub const DEFAULT_COMMENT: &str = "#";

/// Identifier for a graph file format.
///
/// Used in [`GraphRead`] and [`GraphWrite`] to determine the
/// correct parser or writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// One edge per line
    EdgeList,
    /// One neighborhood per line
    AdjacencyDict,
    /// Dense matrix of counts or weights
    AdjacencyMatrix,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "edgelist" | "edge_list" => Ok(FileFormat::EdgeList),
            "adjacencydict" | "adjacency_dict" | "adjdict" => Ok(FileFormat::AdjacencyDict),
            "adjacencymatrix" | "adjacency_matrix" | "adjmatrix" => {
                Ok(FileFormat::AdjacencyMatrix)
            }
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: GraphFromScratch,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::EdgeList => EdgeListReader::new().try_read_graph(reader),
            FileFormat::AdjacencyDict => AdjacencyDictReader::new().try_read_graph(reader),
            FileFormat::AdjacencyMatrix => AdjacencyMatrixReader::new().try_read_graph(reader),
        }
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: AdjacencyList + IncidenceList,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => EdgeListWriter::new().try_write_graph(self, writer),
            FileFormat::AdjacencyDict => AdjacencyDictWriter::new().try_write_graph(self, writer),
            FileFormat::AdjacencyMatrix => {
                AdjacencyMatrixWriter::new().try_write_graph(self, writer)
            }
        }
    }
}

/// Iterator over the lines of a reader that carry data
struct DataLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> DataLines<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            comment_identifier,
        }
    }
}

impl<R: BufRead> Iterator for DataLines<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Err(x) => return Some(Err(x)),
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line)
                    if !self.comment_identifier.is_empty()
                        && line.trim_start().starts_with(self.comment_identifier) =>
                {
                    continue;
                }
                Ok(line) => return Some(Ok(line)),
            }
        }
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value `{next}` found. Cannot parse {}.", $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn round_trip<G>(graph: &G, format: FileFormat) -> G
    where
        G: GraphRead + GraphWrite,
    {
        let mut buffer = Vec::new();
        graph.try_write_to_writer(&mut buffer, format).unwrap();
        G::try_from_reader(buffer.as_slice(), format).unwrap()
    }

    #[test]
    fn formats_from_str() {
        assert_eq!("EdgeList".parse::<FileFormat>().unwrap(), FileFormat::EdgeList);
        assert_eq!(
            "adjacency_matrix".parse::<FileFormat>().unwrap(),
            FileFormat::AdjacencyMatrix
        );
        assert_eq!(
            "adjdict".parse::<FileFormat>().unwrap(),
            FileFormat::AdjacencyDict
        );
        assert!("metis".parse::<FileFormat>().is_err());
    }

    #[test]
    fn random_round_trips() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);
        for _ in 0..10 {
            // no isolated vertices so that edge lists preserve the vertex set
            let mut graph = Graph::erdos_renyi(rng, 25, 0.3);
            graph.connect_cycle(0..25);
            for format in [
                FileFormat::EdgeList,
                FileFormat::AdjacencyDict,
                FileFormat::AdjacencyMatrix,
            ] {
                assert_eq!(round_trip(&graph, format), graph);
            }

            let multi = MultiGraph::configuration_model(rng, &[3; 20]).unwrap();
            for format in [FileFormat::EdgeList, FileFormat::AdjacencyDict] {
                assert_eq!(round_trip(&multi, format), multi);
            }

            let oriented = OrientedGraph::from_edge_list(graph.edges().iter().map(Edge::reverse));
            for format in [
                FileFormat::EdgeList,
                FileFormat::AdjacencyDict,
                FileFormat::AdjacencyMatrix,
            ] {
                assert_eq!(round_trip(&oriented, format), oriented);
            }
        }
    }

    #[test]
    fn comments_and_blank_lines() {
        let input = "# a triangle\n\n0 1\n  # indented comment\n1 2\n2 0\n";
        let graph = Graph::try_from_reader(input.as_bytes(), FileFormat::EdgeList).unwrap();
        assert_eq!(graph, Graph::cycle(3));
    }
}
