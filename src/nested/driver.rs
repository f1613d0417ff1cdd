//! Nested treemap layout.
//!
//! Each level of the tree is squarified inside the rectangle of its parent.
//! Parents keep a padding band around their children for a border and title;
//! parents that carry their own value as well as children may instead shrink
//! their children toward the center to leave that value visible.

use tracing::{debug, warn};

use super::node::{Node, ValueSource};
use super::padding::{Margins, Padding};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::squarify::squarify;

/// Configuration and entry point for nested layout.
///
/// ```
/// use squarify::geometry::Rect;
/// use squarify::nested::{NestedLayout, Node};
///
/// let mut forest = vec![Node::new("root", 0.0).with_children(vec![
///     Node::new("a", 70.0),
///     Node::new("b", 30.0),
/// ])];
/// NestedLayout::new()
///     .layout(&mut forest, Rect::new(0.0, 0.0, 100.0, 100.0))
///     .unwrap();
/// assert!(forest[0].children()[0].rect().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NestedLayout {
    /// Room kept between a parent and its children.
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding: Padding,
    /// Deepest tree accepted, counting the top level as 1.
    #[cfg_attr(feature = "serde", serde(default = "default_max_depth"))]
    pub max_depth: usize,
    /// Recompute every cached nested sum before laying out.
    #[cfg_attr(feature = "serde", serde(default = "default_refresh_sums"))]
    pub refresh_sums: bool,
    /// Reproduce the geometry of older renders (see [`NestedLayout::legacy_compat`]).
    #[cfg_attr(feature = "serde", serde(default))]
    pub legacy_compat: bool,
}

fn default_max_depth() -> usize {
    256
}

fn default_refresh_sums() -> bool {
    true
}

impl Default for NestedLayout {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            max_depth: default_max_depth(),
            refresh_sums: default_refresh_sums(),
            legacy_compat: false,
        }
    }
}

/// One tree level waiting for layout.
struct Pending<'a> {
    level: &'a mut [Node],
    bounds: Rect,
    depth: usize,
}

impl NestedLayout {
    /// Create a layout with default padding `(2, 5)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding.
    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the padding from a 2- or 4-value slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPadding`] for any other number of values.
    pub fn pad(self, pad: &[f64]) -> Result<Self> {
        Ok(self.padding(Padding::from_slice(pad)?))
    }

    /// Set the maximum tree depth.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Choose whether cached nested sums are recomputed before each layout.
    ///
    /// When disabled, sums cached by earlier calls are trusted as-is.
    #[must_use]
    pub fn refresh_sums(mut self, refresh: bool) -> Self {
        self.refresh_sums = refresh;
        self
    }

    /// Reproduce legacy geometry for parents that carry their own value.
    ///
    /// In legacy mode the shrunk child rectangle is offset vertically by
    /// `(dy - dx') / 2` rather than `(dy - dy') / 2`, the parent's value area
    /// is measured against the whole level rather than its own rectangle, and
    /// a shrink carries over to the value-area test of later siblings.
    /// Only the children of the top level are padded with the configured
    /// padding; deeper levels fall back to the default `(2, 5)`.
    #[must_use]
    pub fn legacy_compat(mut self, legacy: bool) -> Self {
        self.legacy_compat = legacy;
        self
    }

    /// Lay out `forest` inside `bounds`, storing a rectangle and normalized
    /// value on every node.
    ///
    /// Each level is expected to be sorted by nested sum, largest first (see
    /// [`sort_nested`]).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBounds`] if `bounds` has a non-positive extent.
    /// - [`Error::DepthLimit`] if the forest is deeper than `max_depth`.
    /// - [`Error::ZeroTotal`] if the nested sums of a level cancel out, which
    ///   only happens with negative values.
    ///
    /// Bounds and depth are checked before any node is touched.
    pub fn layout(&self, forest: &mut [Node], bounds: Rect) -> Result<()> {
        if bounds.dx <= 0.0 || bounds.dy <= 0.0 {
            return Err(Error::InvalidBounds {
                dx: bounds.dx,
                dy: bounds.dy,
            });
        }
        let height = forest.iter().map(Node::height).max().unwrap_or(0);
        if height > self.max_depth {
            return Err(Error::DepthLimit {
                limit: self.max_depth,
            });
        }
        if self.refresh_sums {
            force_nested_sum(forest);
        }

        let top_margins = self.padding.margins();
        let nested_margins = if self.legacy_compat {
            Padding::default().margins()
        } else {
            top_margins
        };
        let mut stack = vec![Pending {
            level: forest,
            bounds,
            depth: 0,
        }];

        while let Some(Pending {
            level,
            bounds,
            depth,
        }) = stack.pop()
        {
            if level.is_empty() {
                continue;
            }
            debug!(
                depth,
                nodes = level.len(),
                x = bounds.x,
                y = bounds.y,
                dx = bounds.dx,
                dy = bounds.dy,
                "nested level"
            );

            place_level(level, bounds)?;

            let margins = if depth == 0 {
                &top_margins
            } else {
                &nested_margins
            };
            let mut reference = bounds;
            for node in level {
                if node.is_leaf() {
                    continue;
                }
                let (inner, shrunk) = self.child_bounds(node, margins, reference);
                if self.legacy_compat && shrunk {
                    reference = inner;
                }

                if inner.dx <= 0.0 || inner.dy <= 0.0 {
                    warn!(
                        node = node.name(),
                        dx = inner.dx,
                        dy = inner.dy,
                        "no room for children, collapsing subtree"
                    );
                    collapse(node.children_mut(), inner);
                    continue;
                }

                stack.push(Pending {
                    level: node.children_mut(),
                    bounds: inner,
                    depth: depth + 1,
                });
            }
        }

        Ok(())
    }

    /// Rectangle the children of `node` are laid out in, and whether it was
    /// shrunk to leave room for the node's own value.
    ///
    /// `reference` is the rectangle of the level `node` belongs to.
    fn child_bounds(&self, node: &mut Node, margins: &Margins, reference: Rect) -> (Rect, bool) {
        let Some(rect) = node.rect() else {
            return (Rect::default(), false);
        };
        let value = node.value();
        if value == 0.0 {
            return (margins.inset(&rect), false);
        }

        let nvalue = node.normalized_value().unwrap_or(0.0);
        let nsum = node.nested_sum(false);
        let own_area = if self.legacy_compat {
            value * reference.area() / nsum
        } else {
            value * nvalue / nsum
        };

        if own_area <= margins.band_area(&rect) {
            return (margins.inset(&rect), false);
        }

        let ratio = (nvalue - own_area) / nvalue;
        let dx = rect.dx * ratio;
        let dy = rect.dy * ratio;
        let x = rect.x + (rect.dx - dx) / 2.0;
        let y = if self.legacy_compat {
            rect.y + (rect.dy - dx) / 2.0
        } else {
            rect.y + (rect.dy - dy) / 2.0
        };
        (Rect::new(x, y, dx, dy), true)
    }
}

/// Normalize one level to `bounds` and assign each node its rectangle.
fn place_level(level: &mut [Node], bounds: Rect) -> Result<()> {
    normalize_nested(level, bounds.dx, bounds.dy)?;
    let sizes: Vec<f64> = level
        .iter()
        .map(|node| node.normalized_value().unwrap_or(0.0))
        .collect();
    let rects = squarify(&sizes, bounds);
    for ((node, rect), size) in level.iter_mut().zip(rects).zip(sizes) {
        node.set_layout(size, rect);
    }
    Ok(())
}

/// Give every node below a degenerate parent an empty rectangle at the
/// parent's interior origin.
fn collapse(level: &mut [Node], inner: Rect) {
    let empty = Rect::new(inner.x, inner.y, 0.0, 0.0);
    let mut stack = vec![level];
    while let Some(level) = stack.pop() {
        for node in level {
            node.set_layout(0.0, empty);
            stack.push(node.children_mut());
        }
    }
}

/// Change the value source of every node in the forest.
///
/// # Errors
///
/// Returns the first attribute lookup error; see [`Node::change_value`].
pub fn change_nested(forest: &mut [Node], source: impl Into<ValueSource>) -> Result<()> {
    let source = source.into();
    for node in forest {
        node.change_all_values(source.clone())?;
    }
    Ok(())
}

/// Recompute the cached nested sum of every node in the forest.
pub fn force_nested_sum(forest: &mut [Node]) {
    for node in forest {
        node.nested_sum(true);
    }
}

/// Sort the children of every node in the forest by nested sum, largest
/// first. The order of the top-level list itself is left to the caller.
pub fn sort_nested(forest: &mut [Node]) {
    for node in forest {
        node.sort_all_children();
    }
}

/// Normalize the top level of a forest to the area `dx * dy`.
///
/// Children are normalized later, against their parent's rectangle, by the
/// layout driver.
///
/// # Errors
///
/// Returns [`Error::ZeroTotal`] if the nested sums of a non-empty level add
/// up to zero.
pub fn normalize_nested(forest: &mut [Node], dx: f64, dy: f64) -> Result<()> {
    if forest.is_empty() {
        return Ok(());
    }
    let total_size: f64 = forest.iter_mut().map(|node| node.nested_sum(false)).sum();
    if total_size == 0.0 {
        return Err(Error::ZeroTotal);
    }
    let total_area = dx * dy;
    for node in forest {
        node.normalize(total_size, total_area);
    }
    Ok(())
}

/// Lay out a forest with the given padding and default settings otherwise.
///
/// # Errors
///
/// Returns [`Error::InvalidPadding`] before any layout work when `pad` does
/// not have 2 or 4 values, and otherwise the errors of
/// [`NestedLayout::layout`].
pub fn squarify_nested(forest: &mut [Node], bounds: Rect, pad: &[f64]) -> Result<()> {
    NestedLayout::new().pad(pad)?.layout(forest, bounds)
}
