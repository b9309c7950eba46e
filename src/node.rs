/*!
# Vertex Representation

Vertex identifiers are plain `u32` values, but unlike dense `0..n` numberings they may be sparse:
removing a vertex leaves a hole, and inputs can use arbitrary ids.
A [`Vertex`] pairs such an id with an open attribute map.
Identity (equality, ordering, hashing) is decided by the id alone.
*/

use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
};

use crate::attr::{AttrValue, Attributes};

/// Vertex identifiers can be any `u32`
pub type Node = u32;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumNodes = Node;

/// A vertex with its attribute payload.
///
/// The id is immutable once created; attributes are not part of the identity.
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    id: Node,
    data: Attributes,
}

impl Vertex {
    /// Creates a vertex without attributes
    pub fn new(id: Node) -> Self {
        Self {
            id,
            data: Attributes::new(),
        }
    }

    /// Creates a vertex with the given attributes
    pub fn with_data(id: Node, data: Attributes) -> Self {
        Self { id, data }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn id(&self) -> Node {
        self.id
    }

    pub fn data(&self) -> &Attributes {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Attributes {
        &mut self.data
    }

    /// Returns the attribute stored under `key`
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.data.get(key)
    }

    /// Stores an attribute, returning the previous value under that key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.data.insert(key.into(), value.into())
    }

    /// The `name` attribute if it is a string, otherwise the decimal id
    pub fn name(&self) -> String {
        match self.data.get("name") {
            Some(AttrValue::Str(name)) => name.clone(),
            _ => self.id.to_string(),
        }
    }

    /// Same attributes under a different id
    pub(crate) fn relabeled(&self, id: Node) -> Self {
        Self {
            id,
            data: self.data.clone(),
        }
    }
}

impl From<Node> for Vertex {
    fn from(id: Node) -> Self {
        Self::new(id)
    }
}

impl From<&Vertex> for Vertex {
    fn from(value: &Vertex) -> Self {
        value.clone()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;

    use super::*;

    #[test]
    fn identity_ignores_attributes() {
        let a = Vertex::new(3).with_attr("color", "red");
        let b = Vertex::new(3).with_attr("color", "blue");
        let c = Vertex::new(4);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);

        let set: FxHashSet<Vertex> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn name_defaults_to_id() {
        assert_eq!(Vertex::new(17).name(), "17");
        assert_eq!(Vertex::new(17).with_attr("name", "hub").name(), "hub");
        assert_eq!(Vertex::new(17).with_attr("name", 5i64).name(), "17");
        assert_eq!(Vertex::from(8).to_string(), "8");
    }
}
