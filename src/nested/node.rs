//! Weighted tree nodes for nested treemaps.

use std::collections::BTreeMap;
use std::fmt;

use super::attr::{check_attribute_name, AttrValue};
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// Where a node's own layout value comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource {
    /// Use this number directly.
    Literal(f64),
    /// Copy the named numeric attribute.
    Attribute(String),
}

impl From<f64> for ValueSource {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for ValueSource {
    fn from(name: &str) -> Self {
        Self::Attribute(name.to_string())
    }
}

impl From<String> for ValueSource {
    fn from(name: String) -> Self {
        Self::Attribute(name)
    }
}

/// Aggregates of exactly zero are laid out as one unit so placeholder nodes
/// stay visible.
fn non_zero(sum: f64) -> f64 {
    if sum == 0.0 {
        1.0
    } else {
        sum
    }
}

/// A named, weighted node that may own children.
///
/// A node's own `value` may be zero, in which case it only occupies the area
/// of its descendants. Layout results ([`rect`](Self::rect) and
/// [`normalized_value`](Self::normalized_value)) are written by the nested
/// layout driver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    name: String,
    value: f64,
    children: Vec<Node>,
    attrs: BTreeMap<String, AttrValue>,
    #[cfg_attr(feature = "serde", serde(skip))]
    nsum: Option<f64>,
    normalized: Option<f64>,
    rect: Option<Rect>,
}

impl Node {
    /// Create a leaf node.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            children: Vec::new(),
            attrs: BTreeMap::new(),
            nsum: None,
            normalized: None,
            rect: None,
        }
    }

    /// Create a node with children and attributes in one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedAttribute`] if an attribute name collides with
    /// a node operation or field.
    pub fn try_new<K, V>(
        name: impl Into<String>,
        value: f64,
        children: Vec<Node>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let mut node = Self::new(name, value).with_children(children);
        for (key, val) in attrs {
            node = node.with_attr(key, val)?;
        }
        Ok(node)
    }

    /// Set the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Attach an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedAttribute`] if `key` collides with a node
    /// operation or field.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Result<Self> {
        let key = key.into();
        check_attribute_name(&key)?;
        self.attrs.insert(key, value.into());
        Ok(self)
    }

    /// Node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Own value, excluding children.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Overwrite the own value.
    ///
    /// Cached sums of this node and its ancestors are not invalidated; call
    /// [`nested_sum`](Self::nested_sum) with `force` on the root afterwards.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Child nodes, in layout order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the children.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Whether the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up an attribute.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// All attributes, ordered by name.
    #[must_use]
    pub fn attrs(&self) -> &BTreeMap<String, AttrValue> {
        &self.attrs
    }

    /// Rectangle assigned by the last layout pass.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Normalized value assigned by the last layout or normalize pass.
    #[must_use]
    pub fn normalized_value(&self) -> Option<f64> {
        self.normalized
    }

    /// Raw cached aggregate, before the zero-to-one substitution.
    ///
    /// `None` until [`nested_sum`](Self::nested_sum) has run on this node.
    #[must_use]
    pub fn cached_sum(&self) -> Option<f64> {
        self.nsum
    }

    pub(crate) fn set_layout(&mut self, normalized: f64, rect: Rect) {
        self.normalized = Some(normalized);
        self.rect = Some(rect);
    }

    /// Redirect the own value to a literal or a numeric attribute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAttribute`] or [`Error::NonNumericAttribute`]
    /// when the named attribute is missing or not a number. The value is left
    /// unchanged in that case.
    pub fn change_value(&mut self, source: impl Into<ValueSource>) -> Result<()> {
        self.value = match source.into() {
            ValueSource::Literal(value) => value,
            ValueSource::Attribute(key) => match self.attrs.get(&key) {
                Some(AttrValue::Number(n)) => *n,
                Some(_) => return Err(Error::NonNumericAttribute(key)),
                None => return Err(Error::UnknownAttribute(key)),
            },
        };
        Ok(())
    }

    /// [`change_value`](Self::change_value) on this node and every
    /// descendant.
    ///
    /// # Errors
    ///
    /// Stops at the first node lacking the attribute; nodes visited before it
    /// keep their new value.
    pub fn change_all_values(&mut self, source: impl Into<ValueSource>) -> Result<()> {
        let source = source.into();
        self.change_value(source.clone())?;
        for child in &mut self.children {
            child.change_all_values(source.clone())?;
        }
        Ok(())
    }

    /// Own value plus the nested sums of all children.
    ///
    /// The aggregate is cached on first computation and reused until `force`
    /// is set, which recomputes the whole subtree. An aggregate of exactly
    /// zero is reported as 1.
    pub fn nested_sum(&mut self, force: bool) -> f64 {
        let sum = match self.nsum {
            Some(sum) if !force => sum,
            _ => {
                let children: f64 = self.children.iter_mut().map(|c| c.nested_sum(force)).sum();
                let sum = self.value + children;
                self.nsum = Some(sum);
                sum
            }
        };
        non_zero(sum)
    }

    /// Sort the immediate children by nested sum, largest first.
    ///
    /// The sort is stable: children with equal sums keep their order.
    pub fn sort_children(&mut self) {
        for child in &mut self.children {
            child.nested_sum(false);
        }
        self.children.sort_by(|a, b| b.settled_sum().total_cmp(&a.settled_sum()));
    }

    /// [`sort_children`](Self::sort_children) at every level below this node.
    pub fn sort_all_children(&mut self) {
        self.sort_children();
        for child in &mut self.children {
            child.sort_all_children();
        }
    }

    /// Set the normalized value to `nested_sum * total_area / total_size`.
    ///
    /// `total_size` is the sum of nested sums of this node and its siblings.
    pub fn normalize(&mut self, total_size: f64, total_area: f64) {
        self.normalized = Some(self.nested_sum(false) * total_area / total_size);
    }

    /// [`normalize`](Self::normalize) this node and every descendant with the
    /// same totals.
    pub fn normalize_children(&mut self, total_size: f64, total_area: f64) {
        self.normalize(total_size, total_area);
        for child in &mut self.children {
            child.normalize_children(total_size, total_area);
        }
    }

    /// Number of levels in this subtree (1 for a leaf).
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        deepest
    }

    /// Visit this node and its descendants in pre-order with their depth
    /// (0 for this node).
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&Node, usize),
    {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
        }
    }

    /// Cached aggregate with the zero substitution, or a fresh computation if
    /// nothing is cached yet.
    fn settled_sum(&self) -> f64 {
        match self.nsum {
            Some(sum) => non_zero(sum),
            None => non_zero(self.value + self.children.iter().map(Node::settled_sum).sum::<f64>()),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name = {}, value = {}, nested_sum = {}",
            self.name,
            self.value,
            self.settled_sum()
        )
    }
}
