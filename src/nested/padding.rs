//! Padding between a parent rectangle and its nested children.

use crate::error::{Error, Result};
use crate::geometry::Rect;

/// How much room a parent keeps around its children.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Padding {
    /// Children are centered along x and bottom aligned along y, leaving
    /// `y - 1` units free at the top for a title.
    Symmetric {
        /// Total horizontal padding.
        x: f64,
        /// Total vertical padding.
        y: f64,
    },
    /// Explicit padding per side.
    Explicit {
        /// Left padding.
        left: f64,
        /// Right padding.
        right: f64,
        /// Bottom padding.
        bottom: f64,
        /// Top padding.
        top: f64,
    },
}

impl Default for Padding {
    fn default() -> Self {
        Self::Symmetric { x: 2.0, y: 5.0 }
    }
}

impl Padding {
    /// Parse a 2-value `(x, y)` or 4-value `(left, right, bottom, top)` padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPadding`] for any other number of values.
    pub fn from_slice(pad: &[f64]) -> Result<Self> {
        match *pad {
            [x, y] => Ok(Self::Symmetric { x, y }),
            [left, right, bottom, top] => Ok(Self::Explicit {
                left,
                right,
                bottom,
                top,
            }),
            _ => Err(Error::InvalidPadding { len: pad.len() }),
        }
    }

    /// Resolve into origin offsets and total shrink per axis.
    #[must_use]
    pub fn margins(&self) -> Margins {
        match *self {
            Self::Symmetric { x, y } => Margins {
                offset_x: x / 2.0,
                shrink_x: x,
                offset_y: 1.0,
                shrink_y: y - 1.0,
            },
            Self::Explicit {
                left,
                right,
                bottom,
                top,
            } => Margins {
                offset_x: left,
                shrink_x: left + right,
                offset_y: bottom,
                shrink_y: bottom + top,
            },
        }
    }
}

impl TryFrom<&[f64]> for Padding {
    type Error = Error;

    fn try_from(pad: &[f64]) -> Result<Self> {
        Self::from_slice(pad)
    }
}

/// Resolved padding: how far the children's origin moves and how much the
/// parent's extents shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Shift of the origin along x.
    pub offset_x: f64,
    /// Total reduction of `dx`.
    pub shrink_x: f64,
    /// Shift of the origin along y.
    pub offset_y: f64,
    /// Total reduction of `dy`.
    pub shrink_y: f64,
}

impl Margins {
    /// Interior of `rect` left for children.
    #[must_use]
    pub fn inset(&self, rect: &Rect) -> Rect {
        Rect::new(
            rect.x + self.offset_x,
            rect.y + self.offset_y,
            rect.dx - self.shrink_x,
            rect.dy - self.shrink_y,
        )
    }

    /// Area of the padding band around the interior of `rect`, measured the
    /// way parents with their own value compare against it.
    #[must_use]
    pub fn band_area(&self, rect: &Rect) -> f64 {
        let horizontal = self.offset_x + self.shrink_x;
        let vertical = self.shrink_y + self.offset_y;
        horizontal * rect.dy + vertical * (rect.dx - horizontal)
    }
}
