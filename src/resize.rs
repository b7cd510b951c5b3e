//! Edge-drag resize state machine for a single slot.
//!
//! A resize is armed by hovering near an edge, started by a press while
//! armed, and updated from the rectangle captured at press time so the
//! opposite edge stays pinned no matter how far the pointer travels.

use slotmark_ui::{Point, Rectangle};

use crate::edges::{EdgeSet, collided_edges, collides_with_tolerance};

/// Resize interaction state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResizeState {
    /// Pointer is away from every edge band
    #[default]
    Idle,
    /// Pointer hovers an edge band; the next press grabs these edges
    Armed { edges: EdgeSet },
    /// Edges are grabbed; motion reshapes the rect captured at press time
    Resizing { edges: EdgeSet, original: Rectangle },
}

/// Apply an edge drag to the rectangle captured at press time.
///
/// Dragged edges follow the pointer while their opposite edges stay
/// pinned. Extents are not clamped: pushing an edge past its opposite
/// side produces a negative extent.
pub fn apply_edge_drag(original: Rectangle, edges: EdgeSet, point: Point) -> Rectangle {
    let mut rect = original;

    if edges.west {
        rect.x = point.x;
        rect.width = original.right() - point.x;
    } else if edges.east {
        rect.width = point.x - original.x;
    }

    if edges.north {
        rect.y = point.y;
        rect.height = original.bottom() - point.y;
    } else if edges.south {
        rect.height = point.y - original.y;
    }

    rect
}

/// Drives [`ResizeState`] from hover/press/motion/release inputs.
#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    state: ResizeState,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update arming from the hover position.
    ///
    /// Returns the edge set relevant for the cursor: the hovered bands
    /// while idle or armed, or the grabbed edges while resizing (which
    /// keep the resize cursor even when the pointer leaves the band).
    pub fn hover(&mut self, rect: Rectangle, point: Point, tolerance: f32) -> Option<EdgeSet> {
        if let ResizeState::Resizing { edges, .. } = self.state {
            return Some(edges);
        }

        if collides_with_tolerance(rect, point, tolerance) {
            let edges = collided_edges(rect, point, tolerance);
            if !edges.is_empty() {
                self.state = ResizeState::Armed { edges };
                return Some(edges);
            }
        }

        self.state = ResizeState::Idle;
        None
    }

    /// Grab the armed edges, capturing the rect to resize from.
    /// Returns true when the press was consumed.
    pub fn press(&mut self, rect: Rectangle) -> bool {
        if let ResizeState::Armed { edges } = self.state {
            self.state = ResizeState::Resizing {
                edges,
                original: rect,
            };
            true
        } else {
            false
        }
    }

    /// Rectangle for the current pointer position, or None when no
    /// resize is in progress.
    pub fn motion(&self, point: Point) -> Option<Rectangle> {
        let ResizeState::Resizing { edges, original } = self.state else {
            return None;
        };
        Some(apply_edge_drag(original, edges, point))
    }

    /// Finish an active resize. Returns true when one was in progress.
    pub fn release(&mut self) -> bool {
        if matches!(self.state, ResizeState::Resizing { .. }) {
            self.state = ResizeState::Idle;
            true
        } else {
            false
        }
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, ResizeState::Resizing { .. })
    }

    /// Grabbed edges of an active resize, if any.
    pub fn active_edges(&self) -> Option<EdgeSet> {
        match self.state {
            ResizeState::Resizing { edges, .. } => Some(edges),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 5.0;

    fn rect() -> Rectangle {
        Rectangle::new(10.0, 10.0, 50.0, 50.0)
    }

    fn assert_rect(r: Rectangle, x: f32, y: f32, width: f32, height: f32) {
        assert_eq!(r.x, x);
        assert_eq!(r.y, y);
        assert_eq!(r.width, width);
        assert_eq!(r.height, height);
    }

    #[test]
    fn test_east_drag_changes_only_width() {
        let mut ctrl = ResizeController::new();
        assert!(ctrl.hover(rect(), Point::new(60.0, 35.0), TOLERANCE).is_some());
        assert!(ctrl.press(rect()));

        let resized = ctrl.motion(Point::new(80.0, 35.0));
        assert_rect(resized.unwrap(), 10.0, 10.0, 70.0, 50.0);
    }

    #[test]
    fn test_west_drag_pins_right_edge() {
        let mut ctrl = ResizeController::new();
        ctrl.hover(rect(), Point::new(10.0, 35.0), TOLERANCE);
        assert!(ctrl.press(rect()));

        let resized = ctrl.motion(Point::new(0.0, 35.0)).unwrap();
        assert_rect(resized, 0.0, 10.0, 60.0, 50.0);
        // Right edge unchanged
        assert_eq!(resized.right(), rect().right());
    }

    #[test]
    fn test_corner_drag_moves_both_axes() {
        // Grab the top-left corner and drag up-left: the bottom-right
        // corner stays pinned
        let mut ctrl = ResizeController::new();
        let edges = ctrl.hover(rect(), Point::new(10.0, 10.0), TOLERANCE).unwrap();
        assert!(edges.north && edges.west);
        assert!(ctrl.press(rect()));

        let resized = ctrl.motion(Point::new(20.0, 0.0)).unwrap();
        assert_rect(resized, 20.0, 0.0, 40.0, 60.0);
    }

    #[test]
    fn test_no_clamping_past_opposite_edge() {
        let mut ctrl = ResizeController::new();
        ctrl.hover(rect(), Point::new(60.0, 35.0), TOLERANCE);
        ctrl.press(rect());

        // Dragging the east edge left of the west edge goes negative
        let resized = ctrl.motion(Point::new(0.0, 35.0)).unwrap();
        assert_eq!(resized.width, -10.0);
    }

    #[test]
    fn test_resize_stays_grabbed_outside_band() {
        let mut ctrl = ResizeController::new();
        ctrl.hover(rect(), Point::new(60.0, 35.0), TOLERANCE);
        ctrl.press(rect());

        // Far outside the edge band, still resizing
        let resized = ctrl.motion(Point::new(200.0, 35.0));
        assert_rect(resized.unwrap(), 10.0, 10.0, 190.0, 50.0);
        assert!(ctrl.is_resizing());

        assert!(ctrl.release());
        assert!(!ctrl.is_resizing());
    }

    #[test]
    fn test_press_without_armed_edge_is_ignored() {
        let mut ctrl = ResizeController::new();
        ctrl.hover(rect(), Point::new(35.0, 35.0), TOLERANCE);
        assert!(!ctrl.press(rect()));
        assert!(ctrl.motion(Point::new(80.0, 35.0)).is_none());
    }

    #[test]
    fn test_hover_disarms_when_leaving_band() {
        let mut ctrl = ResizeController::new();
        assert!(ctrl.hover(rect(), Point::new(60.0, 35.0), TOLERANCE).is_some());
        assert!(ctrl.hover(rect(), Point::new(200.0, 200.0), TOLERANCE).is_none());
        assert!(!ctrl.press(rect()));
    }

    #[test]
    fn test_hover_while_resizing_keeps_grabbed_edges() {
        let mut ctrl = ResizeController::new();
        ctrl.hover(rect(), Point::new(60.0, 35.0), TOLERANCE);
        ctrl.press(rect());

        // Hovering far away reports the grabbed edges, not the bands
        let edges = ctrl.hover(rect(), Point::new(300.0, 300.0), TOLERANCE).unwrap();
        assert!(edges.east);
        assert_eq!(ctrl.active_edges(), Some(edges));
    }
}
