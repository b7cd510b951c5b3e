//! Rectangle construction mathematics.
//!
//! This module contains the math for building rectangles from arbitrary
//! drag gestures, extracted for testability and reusability.

use slotmark_ui::{Point, Rectangle};

/// Component-wise midpoint of two points.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Build a rectangle from two opposite corners.
///
/// The corners may come from a drag in any direction; the result always
/// has non-negative width and height. The center is the midpoint of the
/// corners and the origin sits half the extent away from it, so swapping
/// the arguments produces the same rectangle.
///
/// # Arguments
/// * `a` - Anchor corner (where the drag started)
/// * `b` - Moving corner (current cursor position)
///
/// # Returns
/// A Rectangle spanning the two corners.
pub fn normalize_rect(a: Point, b: Point) -> Rectangle {
    let center = midpoint(a, b);
    let width = (b.x - a.x).abs();
    let height = (b.y - a.y).abs();

    Rectangle::new(
        center.x - width / 2.0,
        center.y - height / 2.0,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn rect_approx_eq(r: Rectangle, x: f32, y: f32, width: f32, height: f32) -> bool {
        approx_eq(r.x, x) && approx_eq(r.y, y) && approx_eq(r.width, width) && approx_eq(r.height, height)
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Point::new(10.0, 20.0), Point::new(30.0, 60.0));
        assert!(approx_eq(m.x, 20.0));
        assert!(approx_eq(m.y, 40.0));
    }

    #[test]
    fn test_normalize_rect_down_right() {
        let r = normalize_rect(Point::new(50.0, 50.0), Point::new(150.0, 120.0));
        assert!(rect_approx_eq(r, 50.0, 50.0, 100.0, 70.0));
    }

    #[test]
    fn test_normalize_rect_direction_independent() {
        // All four drag directions between the same corners give the same rect
        let a = Point::new(50.0, 50.0);
        let b = Point::new(150.0, 120.0);
        let c = Point::new(50.0, 120.0);
        let d = Point::new(150.0, 50.0);

        let expected = normalize_rect(a, b);
        for (from, to) in [(b, a), (c, d), (d, c)] {
            let r = normalize_rect(from, to);
            assert!(rect_approx_eq(r, expected.x, expected.y, expected.width, expected.height));
        }
    }

    #[test]
    fn test_normalize_rect_degenerate() {
        // Coincident corners give a zero-size rect at that point
        let p = Point::new(42.0, 17.0);
        let r = normalize_rect(p, p);
        assert!(rect_approx_eq(r, 42.0, 17.0, 0.0, 0.0));
    }
}
