/*!
# Graph Generators

This module provides builder-style random graph generators and deterministic constructors of
small structures.

Each generator is configured fluently and then asked for its edges:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using the setter traits (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate(rng)` or a whole graph via `build(rng)`.

All generators produce vertices `0..n` and undirected edges; an oriented target graph keeps every
edge in the direction `start -> end` as produced. Simple targets merge parallel edges, multigraphs
keep them.

Supported models:
- G(n,p): Erdős–Rényi model with independent edge probability
- G(n,m): uniform random graphs with a fixed number of edges
- Configuration model: random matching of half-edges for a prescribed degree sequence
- Chung–Lu: independent edges for a prescribed expected degree sequence
- Barabási–Albert: linear preferential attachment
- Watts–Strogatz: rewired ring lattices

The [`RandomGraph`] trait wraps these generators into one-call constructors on the undirected graph
types; oriented graphs can still be built from a configured generator via [`GraphGenerator::build`].
*/

use rand::Rng;
use tracing::debug;

use crate::{error::*, prelude::*, utils::*};

mod barabasi_albert;
mod configuration;
mod gnm;
mod gnp;
mod substructures;
mod watts_strogatz;

pub use barabasi_albert::*;
pub use configuration::*;
pub use gnm::*;
pub use gnp::*;
pub use substructures::*;
pub use watts_strogatz::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Builder-variant of [`NumNodesGen::set_nodes`]
    fn nodes(mut self, n: NumNodes) -> Self
    where
        Self: Sized,
    {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Builder-variant of [`NumEdgesGen::set_edges`]
    fn edges(mut self, m: NumEdges) -> Self
    where
        Self: Sized,
    {
        self.set_edges(m);
        self
    }
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Sets the average degree of this generator.
    fn set_avg_deg(&mut self, deg: f64);

    /// Builder-variant of [`AverageDegreeGen::set_avg_deg`]
    fn avg_deg(mut self, deg: f64) -> Self
    where
        Self: Sized,
    {
        self.set_avg_deg(deg);
        self
    }
}

/// General trait for a configured random edge generator.
pub trait GraphGenerator {
    /// Number of vertices of the generated graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Generates the edges of a random graph on vertices `0..n`.
    /// Fails if the configured parameters admit no graph.
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>>
    where
        R: Rng;

    /// Generates a whole graph, isolated vertices included
    fn build<G, R>(&self, rng: &mut R) -> Result<G>
    where
        G: GraphFromScratch,
        R: Rng,
    {
        let edges = self.generate(rng)?;
        debug!(
            nodes = self.number_of_nodes(),
            edges = edges.len(),
            "generated random graph"
        );
        Ok(G::from_edges(0..self.number_of_nodes(), edges))
    }
}

/// Trait for building full graph instances from common random models.
///
/// Provided implementations use the corresponding edge generators under the hood.
/// Only undirected graphs implement it, as every model produces unordered vertex pairs.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph; `p` is clamped to `[0, 1]`.
    fn erdos_renyi<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,m)` graph with exactly `m` edges.
    /// Fails if `m` exceeds the number of vertex pairs.
    fn erdos_renyi_edges<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng;

    /// Creates a configuration-model graph; vertex `i` receives `degrees[i]` half-edges.
    fn configuration_model<R>(rng: &mut R, degrees: &[NumNodes]) -> Result<Self>
    where
        R: Rng;

    /// Creates a Chung–Lu graph with the given expected degrees.
    fn chung_lu<R>(rng: &mut R, degrees: &[NumNodes]) -> Result<Self>
    where
        R: Rng;

    /// Creates a Barabási–Albert graph where every new vertex attaches to `m` existing ones.
    fn barabasi_albert<R>(rng: &mut R, n: NumNodes, m: NumNodes) -> Result<Self>
    where
        R: Rng;

    /// Creates a Watts–Strogatz graph with mean degree `k` and rewiring probability `beta`.
    fn watts_strogatz<R>(rng: &mut R, n: NumNodes, k: NumNodes, beta: f64) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphType<Dir = Undirected>,
{
    fn erdos_renyi<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        let edges = Gnp::new().nodes(n).sample(rng, p.clamp_probability());
        debug!(nodes = n, edges = edges.len(), p, "generated G(n,p) graph");
        Self::from_edges(0..n, edges)
    }

    fn erdos_renyi_edges<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng,
    {
        Gnm::new().nodes(n).edges(m).build(rng)
    }

    fn configuration_model<R>(rng: &mut R, degrees: &[NumNodes]) -> Result<Self>
    where
        R: Rng,
    {
        ConfigurationModel::new()
            .degrees(degrees.iter().copied())
            .build(rng)
    }

    fn chung_lu<R>(rng: &mut R, degrees: &[NumNodes]) -> Result<Self>
    where
        R: Rng,
    {
        ChungLu::new()
            .expected_degrees(degrees.iter().copied())
            .build(rng)
    }

    fn barabasi_albert<R>(rng: &mut R, n: NumNodes, m: NumNodes) -> Result<Self>
    where
        R: Rng,
    {
        BarabasiAlbert::new().nodes(n).attachments(m).build(rng)
    }

    fn watts_strogatz<R>(rng: &mut R, n: NumNodes, k: NumNodes, beta: f64) -> Result<Self>
    where
        R: Rng,
    {
        WattsStrogatz::new()
            .nodes(n)
            .mean_degree(k)
            .rewiring(beta)
            .build(rng)
    }
}

/// Sum of a degree sequence, failing if it is odd
fn even_degree_sum(degrees: &[NumNodes]) -> Result<u64> {
    let sum: u64 = degrees.iter().map(|&d| d as u64).sum();
    if sum % 2 == 1 {
        return Err(GraphError::OddDegreeSum(sum));
    }
    Ok(sum)
}
