//! Error types for treemap layout operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or laying out a treemap.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Padding was given with an arity other than 2 or 4.
    #[error("Invalid pad argument: expected 2 or 4 values, got {len}")]
    InvalidPadding {
        /// Number of values supplied.
        len: usize,
    },

    /// An attribute name collides with a built-in node operation or field.
    #[error("{0} is a method of the node type and cannot be used as an attribute name")]
    ReservedAttribute(String),

    /// A value source referred to an attribute the node does not carry.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A value source referred to an attribute that is not a number.
    #[error("Attribute {0} is not numeric")]
    NonNumericAttribute(String),

    /// Sizes to normalize sum to zero.
    #[error("Cannot normalize sizes that sum to zero")]
    ZeroTotal,

    /// Layout bounds with a non-positive dimension.
    #[error("Invalid layout bounds: {dx}x{dy}")]
    InvalidBounds {
        /// Width of the bounds.
        dx: f64,
        /// Height of the bounds.
        dy: f64,
    },

    /// The tree is deeper than the configured depth limit.
    #[error("Tree exceeds maximum layout depth of {limit}")]
    DepthLimit {
        /// Configured limit.
        limit: usize,
    },
}
