//! Geometric primitives for treemap layout.
//!
//! Rectangles are stored as an origin plus extents (`dx`, `dy`), the same
//! shape a bar-style renderer consumes directly.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which axis a strip of rectangles accumulates along.
///
/// A free rectangle at least as wide as it is tall is filled with a *row*:
/// one shared width, rectangles stacked along y. Otherwise it is filled
/// with a *column*: one shared height, rectangles stacked along x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Shared width, stacked vertically.
    Row,
    /// Shared height, stacked horizontally.
    Column,
}

impl Orientation {
    /// Pick the orientation for filling `rect`.
    #[must_use]
    pub fn for_rect(rect: &Rect) -> Self {
        if rect.dx >= rect.dy {
            Self::Row
        } else {
            Self::Column
        }
    }
}

/// A rectangle defined by its origin and extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X coordinate of the origin.
    pub x: f64,
    /// Y coordinate of the origin.
    pub y: f64,
    /// Extent along x.
    pub dx: f64,
    /// Extent along y.
    pub dy: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self { x, y, dx, dy }
    }

    /// Get the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.dx * self.dy
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.dx / 2.0, self.y + self.dy / 2.0)
    }

    /// Check if a point is inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.dx
            && point.y >= self.y
            && point.y <= self.y + self.dy
    }

    /// Check if `other` lies within this rectangle, allowing `eps` of slack
    /// on every edge for accumulated floating-point error.
    #[must_use]
    pub fn encloses(&self, other: &Rect, eps: f64) -> bool {
        other.x >= self.x - eps
            && other.y >= self.y - eps
            && other.x + other.dx <= self.x + self.dx + eps
            && other.y + other.dy <= self.y + self.dy + eps
    }

    /// Ratio of the longer side to the shorter side (1.0 for a square).
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        (self.dx / self.dy).max(self.dy / self.dx)
    }

    /// Shrink by one unit on each side along every axis longer than 2.
    ///
    /// Axes of length 2 or less are left alone so the rectangle never
    /// inverts.
    #[must_use]
    pub fn padded(mut self) -> Self {
        if self.dx > 2.0 {
            self.x += 1.0;
            self.dx -= 2.0;
        }
        if self.dy > 2.0 {
            self.y += 1.0;
            self.dy -= 2.0;
        }
        self
    }
}
