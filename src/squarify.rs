//! Flat squarified treemap layout.
//!
//! Implements the greedy grouping heuristic from Bruls, Huizing & van Wijk,
//! "Squarified Treemaps" (2000): grow a strip one size at a time while the
//! worst aspect ratio in the strip does not get worse, commit the strip, then
//! continue in the space left over.
//!
//! Performance target: 10K sizes < 50ms

use tracing::trace;

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::strip::{layout, leftover, worst_ratio};

/// Number of leading sizes that form the next strip.
///
/// Keeps growing while adding the next size leaves the worst ratio equal or
/// better; ties extend the strip.
fn split_point(sizes: &[f64], bounds: Rect) -> usize {
    let mut split = 1;
    while split < sizes.len()
        && worst_ratio(&sizes[..split], bounds) >= worst_ratio(&sizes[..=split], bounds)
    {
        split += 1;
    }
    split
}

/// Compute treemap rectangles.
///
/// `sizes` must be positive, sorted in descending order and normalized to the
/// area of `bounds` (`bounds.dx * bounds.dy == sizes.iter().sum()`), for
/// example with [`normalize_sizes`]. The returned rectangles correspond
/// positionally to `sizes`.
///
/// Zero sizes yield zero-area rectangles. Negative sizes are not rejected and
/// produce meaningless geometry.
///
/// # Examples
///
/// ```
/// use squarify::geometry::Rect;
/// use squarify::squarify::squarify;
///
/// let rects = squarify(&[100.0], Rect::new(0.0, 0.0, 10.0, 10.0));
/// assert_eq!(rects, vec![Rect::new(0.0, 0.0, 10.0, 10.0)]);
/// ```
#[must_use]
pub fn squarify(sizes: &[f64], bounds: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(sizes.len());
    let mut remaining = sizes;
    let mut free = bounds;

    while !remaining.is_empty() {
        if remaining.len() == 1 {
            rects.extend(layout(remaining, free));
            break;
        }

        let split = split_point(remaining, free);
        let (current, rest) = remaining.split_at(split);
        trace!(
            group = current.len(),
            remaining = rest.len(),
            x = free.x,
            y = free.y,
            dx = free.dx,
            dy = free.dy,
            "squarify strip"
        );

        rects.extend(layout(current, free));
        free = leftover(current, free);
        remaining = rest;
    }

    rects
}

/// Pad a single rectangle in place.
///
/// See [`Rect::padded`].
pub fn pad_rectangle(rect: &mut Rect) {
    *rect = rect.padded();
}

/// Compute padded treemap rectangles.
///
/// Same as [`squarify`], except every rectangle is shrunk by one unit on each
/// side (where it is wide enough) to leave a visible border. Padding is applied
/// after layout and does not affect placement.
#[must_use]
pub fn padded_squarify(sizes: &[f64], bounds: Rect) -> Vec<Rect> {
    let mut rects = squarify(sizes, bounds);
    rects.iter_mut().for_each(pad_rectangle);
    rects
}

/// Normalize values so that their sum equals `dx * dy`.
///
/// An empty input normalizes to an empty list.
///
/// # Errors
///
/// Returns [`Error::ZeroTotal`] if the values are non-empty and sum to zero.
///
/// # Examples
///
/// ```
/// use squarify::squarify::normalize_sizes;
///
/// let sizes = normalize_sizes([1, 1, 1, 1], 10.0, 10.0).unwrap();
/// assert_eq!(sizes, vec![25.0; 4]);
/// ```
pub fn normalize_sizes<I, T>(sizes: I, dx: f64, dy: f64) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = T>,
    T: Into<f64>,
{
    let sizes: Vec<f64> = sizes.into_iter().map(Into::into).collect();
    if sizes.is_empty() {
        return Ok(sizes);
    }

    let total_size: f64 = sizes.iter().sum();
    if total_size == 0.0 {
        return Err(Error::ZeroTotal);
    }

    let total_area = dx * dy;
    Ok(sizes.into_iter().map(|size| size * total_area / total_size).collect())
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sorted_sizes() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(0.1f64..1000.0, 1..60).prop_map(|mut sizes| {
            sizes.sort_by(|a, b| b.total_cmp(a));
            sizes
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// One rectangle per size, each with the area of its size.
        #[test]
        fn prop_one_rect_per_size(
            sizes in sorted_sizes(),
            dx in 1.0f64..500.0,
            dy in 1.0f64..500.0,
        ) {
            let normed = normalize_sizes(sizes.iter().copied(), dx, dy).unwrap();
            let rects = squarify(&normed, Rect::new(0.0, 0.0, dx, dy));

            prop_assert_eq!(rects.len(), normed.len());
            for (rect, size) in rects.iter().zip(&normed) {
                prop_assert!((rect.area() - size).abs() <= 1e-6 * dx * dy);
            }
        }

        /// Rectangles stay inside the bounds and cover its area.
        #[test]
        fn prop_rects_within_bounds(
            sizes in sorted_sizes(),
            x in -100.0f64..100.0,
            y in -100.0f64..100.0,
            dx in 1.0f64..500.0,
            dy in 1.0f64..500.0,
        ) {
            let bounds = Rect::new(x, y, dx, dy);
            let normed = normalize_sizes(sizes.iter().copied(), dx, dy).unwrap();
            let rects = squarify(&normed, bounds);

            let eps = 1e-6 * dx.max(dy).max(x.abs()).max(y.abs()).max(1.0);
            for rect in &rects {
                prop_assert!(bounds.encloses(rect, eps), "{:?} escapes {:?}", rect, bounds);
                prop_assert!(rect.dx > 0.0 && rect.dy > 0.0);
            }
            let total: f64 = rects.iter().map(Rect::area).sum();
            prop_assert!((total - dx * dy).abs() <= 1e-6 * dx * dy);
        }

        /// Padding never inverts a rectangle.
        #[test]
        fn prop_padding_keeps_positive_extent(
            sizes in sorted_sizes(),
            dx in 1.0f64..200.0,
            dy in 1.0f64..200.0,
        ) {
            let normed = normalize_sizes(sizes.iter().copied(), dx, dy).unwrap();
            for rect in padded_squarify(&normed, Rect::new(0.0, 0.0, dx, dy)) {
                prop_assert!(rect.dx > 0.0);
                prop_assert!(rect.dy > 0.0);
            }
        }
    }
}
