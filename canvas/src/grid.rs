//! Grid-in-circle geometry.
//!
//! Produces the chords of a square grid centered on the world origin, clipped to
//! a circle. Only the vertical family is computed; the horizontal family is its
//! mirror image across the `y = x` diagonal.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::camera::Point;

/// One grid chord in world space, relative to the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSegment {
    pub a: Point,
    pub b: Point,
}

impl GridSegment {
    /// Whether any endpoint coordinate is NaN.
    ///
    /// Grid lines that fall outside the circle have no real chord and come out
    /// this way; they are still emitted.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        [self.a.x, self.a.y, self.b.x, self.b.y].iter().any(|v| v.is_nan())
    }
}

/// Number of grid lines per family for the given circle.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn line_count(radius: f64, tile_size: f64) -> usize {
    (radius / tile_size * 2.0 + 1.0).floor() as usize
}

/// Grid chords covering a circle of `radius` with spacing `tile_size`.
///
/// Returns `2 * line_count(radius, tile_size)` segments, alternating vertical and
/// horizontal. Both arguments must be positive.
#[must_use]
pub fn grid_in_circle(radius: f64, tile_size: f64) -> Vec<GridSegment> {
    let count = line_count(radius, tile_size);
    let offset = radius - (radius + tile_size * (radius / tile_size).ceil());

    let mut segments = Vec::with_capacity(count * 2);
    for i in 1..=count {
        #[allow(clippy::cast_precision_loss)]
        let grid_line = i as f64 * tile_size + offset;

        // Vertical
        let p1 = chord_end(grid_line, radius);
        let p2 = Point::new(p1.x, -p1.y);

        // Horizontal
        let p3 = p1.swap();
        let p4 = p2.swap();

        segments.push(GridSegment { a: p1, b: p2 });
        segments.push(GridSegment { a: p3, b: p4 });
    }
    segments
}

/// Upper intersection of the vertical line `x = grid_line` with the circle.
fn chord_end(grid_line: f64, radius: f64) -> Point {
    Point::new(grid_line, (radius.powi(2) - grid_line.powi(2)).sqrt())
}
