//! Strip primitives: laying a group of sizes along one edge of a rectangle.
//!
//! All functions here expect `sizes` already expressed in the same area units
//! as `bounds.dx * bounds.dy` (see [`crate::squarify::normalize_sizes`]).

use crate::geometry::{Orientation, Rect};

/// Lazily produce the rectangles of one strip.
///
/// Every rectangle shares the strip's thickness (`covered / dy` for a row,
/// `covered / dx` for a column) and advances the cursor by its own length.
fn strip(
    sizes: &[f64],
    bounds: Rect,
    orientation: Orientation,
) -> impl Iterator<Item = Rect> + '_ {
    let covered: f64 = sizes.iter().sum();
    let (thickness, mut cursor) = match orientation {
        Orientation::Row => (covered / bounds.dy, bounds.y),
        Orientation::Column => (covered / bounds.dx, bounds.x),
    };

    sizes.iter().map(move |&size| {
        let length = size / thickness;
        let rect = match orientation {
            Orientation::Row => Rect::new(bounds.x, cursor, thickness, length),
            Orientation::Column => Rect::new(cursor, bounds.y, length, thickness),
        };
        cursor += length;
        rect
    })
}

/// Lay `sizes` out as a row filling the full height of `bounds`.
///
/// Intended for `bounds.dx >= bounds.dy`.
#[must_use]
pub fn layout_row(sizes: &[f64], bounds: Rect) -> Vec<Rect> {
    strip(sizes, bounds, Orientation::Row).collect()
}

/// Lay `sizes` out as a column filling the full width of `bounds`.
///
/// Intended for `bounds.dx < bounds.dy`.
#[must_use]
pub fn layout_col(sizes: &[f64], bounds: Rect) -> Vec<Rect> {
    strip(sizes, bounds, Orientation::Column).collect()
}

/// Lay `sizes` out as a row or column, whichever suits the shape of `bounds`.
#[must_use]
pub fn layout(sizes: &[f64], bounds: Rect) -> Vec<Rect> {
    strip(sizes, bounds, Orientation::for_rect(&bounds)).collect()
}

/// Free space to the right of a row laid out by [`layout_row`].
#[must_use]
pub fn leftover_row(sizes: &[f64], bounds: Rect) -> Rect {
    let covered: f64 = sizes.iter().sum();
    let width = covered / bounds.dy;
    Rect::new(bounds.x + width, bounds.y, bounds.dx - width, bounds.dy)
}

/// Free space above a column laid out by [`layout_col`].
#[must_use]
pub fn leftover_col(sizes: &[f64], bounds: Rect) -> Rect {
    let covered: f64 = sizes.iter().sum();
    let height = covered / bounds.dx;
    Rect::new(bounds.x, bounds.y + height, bounds.dx, bounds.dy - height)
}

/// Free space remaining after [`layout`] places `sizes` in `bounds`.
#[must_use]
pub fn leftover(sizes: &[f64], bounds: Rect) -> Rect {
    match Orientation::for_rect(&bounds) {
        Orientation::Row => leftover_row(sizes, bounds),
        Orientation::Column => leftover_col(sizes, bounds),
    }
}

/// Worst aspect ratio among the rectangles [`layout`] would produce.
///
/// Returns 0.0 for an empty group.
#[must_use]
pub fn worst_ratio(sizes: &[f64], bounds: Rect) -> f64 {
    strip(sizes, bounds, Orientation::for_rect(&bounds))
        .map(|rect| rect.aspect_ratio())
        .fold(0.0, f64::max)
}
