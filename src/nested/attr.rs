//! Caller-supplied node metadata.

use std::fmt;

use crate::error::{Error, Result};

/// Names that cannot be used as node attributes.
///
/// These are the node's own operations and core fields; an attribute with one
/// of these names would be ambiguous when selected as a value source.
pub const RESERVED_ATTRIBUTES: &[&str] = &[
    "nested_sum",
    "sort_children",
    "sort_all_children",
    "normalize",
    "normalize_children",
    "change_value",
    "change_all_values",
    "name",
    "value",
    "children",
];

/// A metadata value attached to a node.
///
/// Numbers can be promoted to the node's layout value with
/// [`Node::change_value`](super::Node::change_value); the other variants are
/// carried for renderers (labels, color keys, flags).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
    /// Boolean flag.
    Flag(bool),
}

impl AttrValue {
    /// Numeric content, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text content, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for AttrValue {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// Reject attribute names that collide with node operations or fields.
///
/// # Errors
///
/// Returns [`Error::ReservedAttribute`] for any name in [`RESERVED_ATTRIBUTES`].
pub fn check_attribute_name(name: &str) -> Result<()> {
    if RESERVED_ATTRIBUTES.contains(&name) {
        return Err(Error::ReservedAttribute(name.to_string()));
    }
    Ok(())
}
