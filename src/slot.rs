//! The slot model: one marked rectangular region over the image.

use slotmark_ui::{Rectangle, Size};

use crate::drag_move::MoveController;
use crate::mapper::{RelativeRectangle, to_absolute, to_relative};
use crate::resize::ResizeController;

/// A rectangular region marked on the image.
///
/// The absolute rect is what hit-testing and drawing use; the relative
/// rect is the durable truth that carries the slot across container
/// resizes. Every user edit updates both, every container resize
/// rebuilds the absolute rect from the fractions.
#[derive(Debug, Clone)]
pub struct Slot {
    pub id: u64,
    pub rect: Rectangle,
    pub relative: RelativeRectangle,
    pub selected: bool,
    pub resize: ResizeController,
    pub movement: MoveController,
}

impl Slot {
    /// Create an unselected slot, deriving its fractions from the
    /// current container and display sizes.
    pub fn new(id: u64, rect: Rectangle, container: Size, display: Size) -> Self {
        Self {
            id,
            rect,
            relative: to_relative(rect, container, display),
            selected: false,
            resize: ResizeController::new(),
            movement: MoveController::new(),
        }
    }

    /// Apply a user edit: store the new absolute rect and re-derive the
    /// fractions.
    pub fn set_rect(&mut self, rect: Rectangle, container: Size, display: Size) {
        self.rect = rect;
        self.relative = to_relative(rect, container, display);
    }

    /// Rebuild the absolute rect after the container changed size.
    pub fn apply_container_resize(&mut self, container: Size, display: Size) {
        self.rect = to_absolute(self.relative, container, display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_slot_is_unselected() {
        let container = Size::new(400.0, 300.0);
        let slot = Slot::new(
            1,
            Rectangle::new(50.0, 50.0, 100.0, 70.0),
            container,
            container,
        );
        assert!(!slot.selected);
        assert!(approx_eq(slot.relative.x, 0.125));
    }

    #[test]
    fn test_set_rect_rederives_fractions() {
        let container = Size::new(400.0, 300.0);
        let mut slot = Slot::new(
            1,
            Rectangle::new(50.0, 50.0, 100.0, 70.0),
            container,
            container,
        );

        slot.set_rect(Rectangle::new(100.0, 75.0, 200.0, 150.0), container, container);
        assert!(approx_eq(slot.relative.x, 0.25));
        assert!(approx_eq(slot.relative.y, 0.25));
        assert!(approx_eq(slot.relative.width, 0.5));
        assert!(approx_eq(slot.relative.height, 0.5));
    }

    #[test]
    fn test_container_resize_rebuilds_from_fractions() {
        let small = Size::new(400.0, 300.0);
        let large = Size::new(800.0, 600.0);
        let mut slot = Slot::new(
            1,
            Rectangle::new(50.0, 50.0, 100.0, 70.0),
            small,
            small,
        );

        slot.apply_container_resize(large, large);
        assert!(approx_eq(slot.rect.x, 100.0));
        assert!(approx_eq(slot.rect.y, 100.0));
        assert!(approx_eq(slot.rect.width, 200.0));
        assert!(approx_eq(slot.rect.height, 140.0));
    }
}
