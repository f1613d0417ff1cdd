//! # Squarify
//!
//! Squarified treemap layout for flat lists and nested trees of weights.
//!
//! Given positive weights sorted in descending order, the layout partitions a
//! rectangle into sub-rectangles whose areas are proportional to the weights
//! while keeping them close to square. Rendering is left to the caller: the
//! output is a list of rectangles (origin plus extents), or for nested data a
//! rectangle stored on every node.
//!
//! ## Quick Start
//!
//! ```rust
//! use squarify::prelude::*;
//!
//! let bounds = Rect::new(0.0, 0.0, 700.0, 433.0);
//! let sizes = normalize_sizes([500, 433, 78, 25, 25, 7], bounds.dx, bounds.dy)?;
//! let rects = squarify(&sizes, bounds);
//!
//! assert_eq!(rects.len(), 6);
//! # Ok::<(), squarify::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for rectangles, padding, attributes
//!   and layout configuration (`Serialize` only for nodes)
//!
//! ## Academic References
//!
//! - Bruls, M., Huizing, K., & van Wijk, J. J. (2000). "Squarified Treemaps."
//!   Proceedings of the Joint Eurographics and IEEE TCVG Symposium on
//!   Visualization.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, rectangles, strip orientation).
pub mod geometry;

/// Row and column strips, leftover space and worst aspect ratio.
pub mod strip;

/// Flat squarified layout, padding and normalization.
pub mod squarify;

/// Nested treemaps over weighted trees.
pub mod nested;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for layout operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use squarify::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Point, Rect};
    pub use crate::nested::{
        force_nested_sum, sort_nested, squarify_nested, AttrValue, NestedLayout, Node, Padding,
        ValueSource,
    };
    pub use crate::squarify::{normalize_sizes, padded_squarify, squarify};
}
