/*!
# Edge Representation

An [`Edge`] is defined by two endpoints, an orientation flag, a weight and an attribute map.
Graphs decide the orientation themselves: undirected graphs clear the flag on insertion,
oriented graphs set it.

- A **non-oriented** edge `(u, v)` equals `(v, u)`; hashing uses the normalized pair.
- An **oriented** edge `(u, v)` only equals `(u, v)`.

Weights and attributes do not take part in equality.
Edges do not implement `Ord`: an order on weights would disagree with the weight-agnostic
equality. Wrap them in [`WeightOrdered`] (or use [`Edge::cmp_weighted`]) to sort by weight.
*/

use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
};

use crate::{
    attr::{AttrValue, Attributes},
    error::{GraphError, Result},
    node::Node,
};

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Edge weights are real numbers
pub type Weight = f64;

/// Weight of an edge that was created without one
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// An edge between two vertices
#[derive(Debug, Clone)]
pub struct Edge {
    pub start: Node,
    pub end: Node,
    pub oriented: bool,
    pub weight: Weight,
    pub data: Attributes,
}

impl Edge {
    /// Non-oriented edge with default weight
    pub fn new(start: Node, end: Node) -> Self {
        Self {
            start,
            end,
            oriented: false,
            weight: DEFAULT_WEIGHT,
            data: Attributes::new(),
        }
    }

    /// Oriented edge `start -> end` with default weight
    pub fn oriented(start: Node, end: Node) -> Self {
        Self {
            oriented: true,
            ..Self::new(start, end)
        }
    }

    /// Starts an [`EdgeBuilder`]
    pub fn builder() -> EdgeBuilder {
        EdgeBuilder::default()
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_orientation(mut self, oriented: bool) -> Self {
        self.oriented = oriented;
        self
    }

    pub fn with_data(mut self, data: Attributes) -> Self {
        self.data = data;
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Returns the attribute stored under `key`
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.data.get(key)
    }

    /// Endpoints as stored
    pub fn endpoints(&self) -> (Node, Node) {
        (self.start, self.end)
    }

    /// The pair under which graphs index this edge:
    /// the ordered pair if oriented, the normalized pair otherwise
    pub fn key(&self) -> (Node, Node) {
        if self.oriented {
            (self.start, self.end)
        } else {
            (self.start.min(self.end), self.start.max(self.end))
        }
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        let (start, end) = (self.start.min(self.end), self.start.max(self.end));
        Self {
            start,
            end,
            ..self.clone()
        }
    }

    /// Returns true if the endpoint with smaller value comes first
    pub fn is_normalized(&self) -> bool {
        self.start <= self.end
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            ..self.clone()
        }
    }

    /// Returns true if `u` is one of the endpoints
    pub fn is_incident(&self, u: Node) -> bool {
        self.start == u || self.end == u
    }

    /// Returns the endpoint opposite to `u`
    pub fn other(&self, u: Node) -> Result<Node> {
        if u == self.start {
            Ok(self.end)
        } else if u == self.end {
            Ok(self.start)
        } else {
            Err(GraphError::NotIncident {
                vertex: u,
                edge: (self.start, self.end),
            })
        }
    }

    /// Total order by weight, breaking ties by the indexing pair.
    /// NaN weights are ordered by `f64::total_cmp`.
    pub fn cmp_weighted(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.key().cmp(&other.key()))
    }

    /// Simple bijection from `0..(n choose 2)` to all possible normalized edges of `n` nodes.
    ///
    /// The bijection works by assigning each node the next `(n - 1)/2` neighbors modulo `n`
    /// (up to rounding) and normalizing the resulting edge
    pub fn from_u64_undir(mut x: u64, n: u64) -> Self {
        debug_assert!(x < n * (n - 1) / 2);

        let pair = |u: u64, v: u64| Self::new(u.min(v) as Node, u.max(v) as Node);

        let mut num_neighbors = (n - 1) / 2;
        if n & 1 == 1 {
            let u = x / num_neighbors;
            return pair(u, (u + 1 + (x % num_neighbors)) % n);
        }

        // `n - 1` is odd: the lower half of the nodes enumerates one neighbor less
        let half_n = n / 2;
        let lower_half = num_neighbors * half_n;
        if x < lower_half {
            let u = x / num_neighbors;
            return pair(u, (u + 1 + (x % num_neighbors)) % n);
        }

        x -= lower_half;
        num_neighbors += 1;
        let u = (x / num_neighbors) + half_n;
        pair(u, (u + 1 + (x % num_neighbors)) % n)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.oriented == other.oriented && self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.oriented.hash(state);
        self.key().hash(state);
    }
}

/// Borrowed edge ordered by [`Edge::cmp_weighted`]; equality follows that order as well
#[derive(Debug, Clone, Copy)]
pub struct WeightOrdered<'a>(pub &'a Edge);

impl PartialEq for WeightOrdered<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WeightOrdered<'_> {}

impl PartialOrd for WeightOrdered<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightOrdered<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_weighted(other.0)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.oriented {
            write!(f, "({}->{})", self.start, self.end)
        } else {
            write!(f, "({},{})", self.start, self.end)
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl From<(Node, Node, Weight)> for Edge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge::new(value.0, value.1).with_weight(value.2)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        value.clone()
    }
}

impl TryFrom<&[Node]> for Edge {
    type Error = GraphError;

    fn try_from(value: &[Node]) -> Result<Self> {
        match *value {
            [start, end] => Ok(Edge::new(start, end)),
            [_] | [] => Err(GraphError::MissingEndpoint),
            _ => Err(GraphError::TooManyEndpoints { found: value.len() }),
        }
    }
}

/// Builds an [`Edge`] from optional parts.
///
/// Endpoints missing from the builder are looked up as integer attributes
/// `start`/`end` in the supplied data.
#[derive(Debug, Clone, Default)]
pub struct EdgeBuilder {
    start: Option<Node>,
    end: Option<Node>,
    oriented: bool,
    weight: Option<Weight>,
    data: Attributes,
}

impl EdgeBuilder {
    pub fn start(mut self, start: Node) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: Node) -> Self {
        self.end = Some(end);
        self
    }

    pub fn oriented(mut self, oriented: bool) -> Self {
        self.oriented = oriented;
        self
    }

    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn data(mut self, data: Attributes) -> Self {
        self.data = data;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Edge> {
        let endpoint = |given: Option<Node>, key: &str| {
            given
                .or_else(|| {
                    self.data
                        .get(key)
                        .and_then(AttrValue::as_i64)
                        .and_then(|x| Node::try_from(x).ok())
                })
                .ok_or(GraphError::MissingEndpoint)
        };

        let start = endpoint(self.start, "start")?;
        let end = endpoint(self.end, "end")?;

        Ok(Edge {
            start,
            end,
            oriented: self.oriented,
            weight: self.weight.unwrap_or(DEFAULT_WEIGHT),
            data: self.data,
        })
    }
}
