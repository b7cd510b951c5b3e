//! Edge proximity testing for slot rectangles.
//!
//! Resizing starts by grabbing an edge, so hit-testing works on bands
//! around the rectangle borders rather than the filled area.

use slotmark_ui::{Point, Rectangle};

/// Which edges of a rectangle a point is near.
///
/// Edge names are visual: north is the top edge (smallest y in window
/// coordinates), south the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeSet {
    pub north: bool,
    pub south: bool,
    pub west: bool,
    pub east: bool,
}

impl EdgeSet {
    /// True when no edge is set.
    pub fn is_empty(&self) -> bool {
        !(self.north || self.south || self.west || self.east)
    }
}

/// True when the point lies within `tolerance` of the rectangle on both
/// axes, including anywhere inside it.
pub fn collides_with_tolerance(rect: Rectangle, point: Point, tolerance: f32) -> bool {
    rect.expanded(tolerance).contains(point)
}

/// Report which edge bands contain the point.
///
/// Each band extends `tolerance` to both sides of its edge. For
/// rectangles thinner than two tolerances the bands overlap; north wins
/// over south and west over east, so at most one edge per axis is set.
///
/// Callers are expected to gate on [`collides_with_tolerance`] first; a
/// far-away point aligned with a band still reports that band.
pub fn collided_edges(rect: Rectangle, point: Point, tolerance: f32) -> EdgeSet {
    let mut edges = EdgeSet::default();

    if (point.y - rect.y).abs() <= tolerance {
        edges.north = true;
    } else if (point.y - rect.bottom()).abs() <= tolerance {
        edges.south = true;
    }

    if (point.x - rect.x).abs() <= tolerance {
        edges.west = true;
    } else if (point.x - rect.right()).abs() <= tolerance {
        edges.east = true;
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 5.0;

    fn rect() -> Rectangle {
        Rectangle::new(10.0, 10.0, 50.0, 50.0)
    }

    #[test]
    fn test_collides_inside_rect() {
        assert!(collides_with_tolerance(rect(), Point::new(35.0, 35.0), TOLERANCE));
    }

    #[test]
    fn test_collides_within_band() {
        // Right edge is at x=60; a point 5 past it still collides
        assert!(collides_with_tolerance(rect(), Point::new(65.0, 35.0), TOLERANCE));
        assert!(!collides_with_tolerance(rect(), Point::new(65.1, 35.0), TOLERANCE));
    }

    #[test]
    fn test_collides_outside_corner_band() {
        // Past the band on both axes
        assert!(!collides_with_tolerance(rect(), Point::new(70.0, 70.0), TOLERANCE));
    }

    #[test]
    fn test_edges_top_center_is_north_only() {
        let edges = collided_edges(rect(), Point::new(35.0, 10.0), TOLERANCE);
        assert!(edges.north);
        assert!(!edges.south);
        assert!(!edges.west);
        assert!(!edges.east);
    }

    #[test]
    fn test_edges_corner_sets_both_axes() {
        let edges = collided_edges(rect(), Point::new(60.0, 10.0), TOLERANCE);
        assert!(edges.north);
        assert!(edges.east);
        assert!(!edges.south);
        assert!(!edges.west);
    }

    #[test]
    fn test_edges_interior_is_empty() {
        let edges = collided_edges(rect(), Point::new(35.0, 35.0), TOLERANCE);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_edges_tiny_rect_prefers_north_and_west() {
        // Bands overlap on a rect smaller than the tolerance; one edge
        // per axis is reported
        let tiny = Rectangle::new(0.0, 0.0, 4.0, 4.0);
        let edges = collided_edges(tiny, Point::new(2.0, 2.0), TOLERANCE);
        assert!(edges.north);
        assert!(edges.west);
        assert!(!edges.south);
        assert!(!edges.east);
    }

    #[test]
    fn test_edges_band_is_inclusive() {
        // Exactly tolerance away still counts
        let edges = collided_edges(rect(), Point::new(35.0, 5.0), TOLERANCE);
        assert!(edges.north);
    }
}
