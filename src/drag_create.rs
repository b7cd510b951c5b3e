//! Drag-to-create session for new slots.
//!
//! A create session runs from press to release. The press seeds a 1x1
//! rectangle so the preview is visible immediately; every move rebuilds
//! the rectangle from the anchor and the current pointer, so dragging in
//! any direction works.

use slotmark_ui::{Point, Rectangle};

use crate::geometry::normalize_rect;

/// Create interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragCreateState {
    #[default]
    Idle,
    Dragging { anchor: Point, rect: Rectangle },
}

/// Drives [`DragCreateState`] from press/motion/release inputs.
#[derive(Debug, Clone, Default)]
pub struct DragCreateController {
    state: DragCreateState,
}

impl DragCreateController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session at the anchor point. Gating (create modifier held,
    /// pointer over the image) is the caller's job.
    pub fn press(&mut self, point: Point) {
        self.state = DragCreateState::Dragging {
            anchor: point,
            rect: Rectangle::new(point.x, point.y, 1.0, 1.0),
        };
    }

    /// Update the session rectangle from the current pointer position.
    pub fn motion(&mut self, point: Point) {
        if let DragCreateState::Dragging { anchor, rect } = &mut self.state {
            *rect = normalize_rect(*anchor, point);
        }
    }

    /// Finish the session, yielding the rectangle to create a slot from.
    /// Returns None when no session was active.
    pub fn release(&mut self) -> Option<Rectangle> {
        match self.state {
            DragCreateState::Dragging { rect, .. } => {
                self.state = DragCreateState::Idle;
                Some(rect)
            }
            DragCreateState::Idle => None,
        }
    }

    /// Rectangle to draw as the in-progress preview, if a session is
    /// active.
    pub fn preview(&self) -> Option<Rectangle> {
        match self.state {
            DragCreateState::Dragging { rect, .. } => Some(rect),
            DragCreateState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragCreateState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_seeds_unit_rect() {
        let mut ctrl = DragCreateController::new();
        ctrl.press(Point::new(50.0, 50.0));

        let preview = ctrl.preview().unwrap();
        assert_eq!(preview.x, 50.0);
        assert_eq!(preview.y, 50.0);
        assert_eq!(preview.width, 1.0);
        assert_eq!(preview.height, 1.0);
    }

    #[test]
    fn test_motion_tracks_drag_down_right() {
        let mut ctrl = DragCreateController::new();
        ctrl.press(Point::new(50.0, 50.0));
        ctrl.motion(Point::new(150.0, 120.0));

        let preview = ctrl.preview().unwrap();
        assert_eq!(preview.x, 50.0);
        assert_eq!(preview.y, 50.0);
        assert_eq!(preview.width, 100.0);
        assert_eq!(preview.height, 70.0);
    }

    #[test]
    fn test_motion_normalizes_reverse_drag() {
        // Dragging up-left of the anchor still gives positive extents
        let mut ctrl = DragCreateController::new();
        ctrl.press(Point::new(150.0, 120.0));
        ctrl.motion(Point::new(50.0, 50.0));

        let preview = ctrl.preview().unwrap();
        assert_eq!(preview.x, 50.0);
        assert_eq!(preview.y, 50.0);
        assert_eq!(preview.width, 100.0);
        assert_eq!(preview.height, 70.0);
    }

    #[test]
    fn test_release_yields_rect_exactly_once() {
        let mut ctrl = DragCreateController::new();
        ctrl.press(Point::new(10.0, 10.0));
        ctrl.motion(Point::new(30.0, 40.0));

        assert!(ctrl.release().is_some());
        assert!(ctrl.release().is_none());
        assert!(!ctrl.is_active());
    }

    #[test]
    fn test_zero_length_drag_keeps_unit_rect() {
        let mut ctrl = DragCreateController::new();
        ctrl.press(Point::new(10.0, 10.0));

        let rect = ctrl.release().unwrap();
        assert_eq!(rect.width, 1.0);
        assert_eq!(rect.height, 1.0);
    }

    #[test]
    fn test_motion_without_session_is_ignored() {
        let mut ctrl = DragCreateController::new();
        ctrl.motion(Point::new(30.0, 40.0));
        assert!(ctrl.preview().is_none());
    }
}
