/*!
# Attributes

Vertices and edges carry an open-ended, ordered map of named attributes.
Values are restricted to the four primitive kinds that graph files usually annotate.
*/

use std::{collections::BTreeMap, fmt::Display};

/// Ordered attribute map attached to every [`Vertex`](crate::node::Vertex) and [`Edge`](crate::edge::Edge)
pub type Attributes = BTreeMap<String, AttrValue>;

/// A single attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Float(f64),
    Int(i64),
    Bool(bool),
}

impl AttrValue {
    /// Returns the string if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as float if it is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(x) => Some(x),
            Self::Int(x) => Some(x as f64),
            _ => None,
        }
    }

    /// Returns the value if this is an `Int`
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(x) => Some(x),
            _ => None,
        }
    }

    /// Returns the value if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(x) => Some(x),
            _ => None,
        }
    }
}

impl Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Int(x) => write!(f, "{x}"),
            Self::Bool(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(AttrValue::from("x").as_str(), Some("x"));
        assert_eq!(AttrValue::from(3i64).as_f64(), Some(3.0));
        assert_eq!(AttrValue::from(3i64).as_i64(), Some(3));
        assert_eq!(AttrValue::from(2.5).as_i64(), None);
        assert_eq!(AttrValue::from(true).as_bool(), Some(true));
        assert_eq!(AttrValue::from(true).as_str(), None);
        assert_eq!(AttrValue::from(1.5).to_string(), "1.5");
    }
}
