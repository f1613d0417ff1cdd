//! Nested (hierarchical) treemaps.
//!
//! A forest of [`Node`]s is laid out level by level: every level is
//! normalized to the rectangle of its parent and squarified, then each parent
//! hands a padded interior to its children.
//!
//! # Example
//!
//! ```rust
//! use squarify::geometry::Rect;
//! use squarify::nested::{sort_nested, squarify_nested, Node};
//!
//! let mut forest = vec![
//!     Node::new("src", 0.0).with_children(vec![
//!         Node::new("lib.rs", 120.0),
//!         Node::new("main.rs", 480.0),
//!     ]),
//!     Node::new("README.md", 200.0),
//! ];
//! sort_nested(&mut forest);
//! squarify_nested(&mut forest, Rect::new(0.0, 0.0, 100.0, 60.0), &[2.0, 5.0]).unwrap();
//!
//! assert_eq!(forest[0].children()[0].name(), "main.rs");
//! ```

mod attr;
mod driver;
mod node;
mod padding;

pub use attr::{check_attribute_name, AttrValue, RESERVED_ATTRIBUTES};
pub use driver::{
    change_nested, force_nested_sum, normalize_nested, sort_nested, squarify_nested, NestedLayout,
};
pub use node::{Node, ValueSource};
pub use padding::{Margins, Padding};
