//! Slot collection and pointer dispatch.
//!
//! The canvas owns every slot plus the create session and routes pointer
//! events to them in a fixed priority: per slot, topmost first, edge
//! resize before body move; drag-create only takes presses no slot
//! claimed, and only with the create modifier held over the image.

use slotmark_ui::{Point, Rectangle, Size};

use crate::constants::MIN_DRAG_DISTANCE;
use crate::drag_create::DragCreateController;
use crate::drag_move::MoveOutcome;
use crate::edges::{EdgeSet, collided_edges, collides_with_tolerance};
use crate::mapper::{container_margins, fit_display_size};
use crate::slot::Slot;

pub struct SlotCanvas {
    slots: Vec<Slot>,
    drag_create: DragCreateController,
    /// Natural pixel size of the loaded image
    natural: Size,
    container: Size,
    display: Size,
    next_id: u64,
    tolerance: f32,
}

impl SlotCanvas {
    pub fn new(natural: Size, container: Size, tolerance: f32) -> Self {
        Self {
            slots: Vec::new(),
            drag_create: DragCreateController::new(),
            natural,
            container,
            display: fit_display_size(natural, container),
            next_id: 0,
            tolerance,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Selected slots in collection order.
    pub fn selection(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter().filter(|slot| slot.selected)
    }

    /// Rectangle the image is drawn into, centered in the container.
    pub fn image_area(&self) -> Rectangle {
        let (margin_x, margin_y) = container_margins(self.container, self.display);
        Rectangle::new(margin_x, margin_y, self.display.width, self.display.height)
    }

    /// In-progress create preview, if a session is active.
    pub fn preview(&self) -> Option<Rectangle> {
        self.drag_create.preview()
    }

    /// Append a slot for the given rect, unselected, with a fresh id.
    pub fn add_slot(&mut self, rect: Rectangle) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.slots.push(Slot::new(id, rect, self.container, self.display));
        log::info!(
            "Slot {}: created at ({:.1}, {:.1}) size {:.1}x{:.1}",
            id,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
        id
    }

    /// Remove every selected slot.
    pub fn delete_selected(&mut self) {
        let before = self.slots.len();
        self.slots.retain(|slot| !slot.selected);

        let removed = before - self.slots.len();
        if removed > 0 {
            log::info!(
                "Deleted {} selected slot(s), {} remain",
                removed,
                self.slots.len()
            );
        }
    }

    /// Refit the image and rebuild every slot's absolute rect from its
    /// stored fractions.
    pub fn on_container_resized(&mut self, container: Size) {
        self.container = container;
        self.display = fit_display_size(self.natural, container);

        // A zero display (minimized window) has nothing to remap against;
        // the fractions stay authoritative until a usable size arrives
        if self.display.width <= 0.0 || self.display.height <= 0.0 {
            return;
        }

        for slot in &mut self.slots {
            slot.apply_container_resize(container, self.display);
        }
        log::debug!(
            "Container {:.0}x{:.0}: remapped {} slot(s)",
            container.width,
            container.height,
            self.slots.len()
        );
    }

    /// Route a press. Topmost slot first, resize before move; drag-create
    /// takes unclaimed presses over the image while the modifier is held.
    pub fn press(&mut self, point: Point, create_modifier: bool) {
        let tolerance = self.tolerance;

        for slot in self.slots.iter_mut().rev() {
            if slot.resize.hover(slot.rect, point, tolerance).is_some()
                && slot.resize.press(slot.rect)
            {
                log::debug!("Slot {}: resize grabbed {:?}", slot.id, slot.resize.active_edges());
                return;
            }
            if slot.movement.press(slot.rect, point) {
                log::debug!("Slot {}: pressed inside body", slot.id);
                return;
            }
        }

        if create_modifier && self.image_area().contains(point) {
            self.drag_create.press(point);
            log::debug!("Create session started at ({:.1}, {:.1})", point.x, point.y);
        }
    }

    /// Route pointer motion to whichever session is active.
    pub fn motion(&mut self, point: Point) {
        let container = self.container;
        let display = self.display;

        for slot in &mut self.slots {
            if let Some(rect) = slot.resize.motion(point) {
                slot.set_rect(rect, container, display);
                log::trace!("Slot {}: resizing", slot.id);
                return;
            }
            if let Some(origin) = slot.movement.motion(point, MIN_DRAG_DISTANCE) {
                let rect = Rectangle::new(origin.x, origin.y, slot.rect.width, slot.rect.height);
                slot.set_rect(rect, container, display);
                log::trace!("Slot {}: moving", slot.id);
                return;
            }
        }

        self.drag_create.motion(point);
    }

    /// Route a release: finish whichever session is active. A click
    /// (sub-threshold press inside a body) toggles that slot's selection;
    /// a finished create session appends its slot.
    pub fn release(&mut self) {
        for slot in &mut self.slots {
            if slot.resize.release() {
                log::info!("Slot {}: resized to {:?}", slot.id, slot.rect);
                return;
            }
            if let Some(outcome) = slot.movement.release() {
                match outcome {
                    MoveOutcome::Click => {
                        slot.selected = !slot.selected;
                        log::info!("Slot {}: selected={}", slot.id, slot.selected);
                    }
                    MoveOutcome::Moved => {
                        log::info!("Slot {}: moved to ({:.1}, {:.1})", slot.id, slot.rect.x, slot.rect.y);
                    }
                }
                return;
            }
        }

        if let Some(rect) = self.drag_create.release() {
            self.add_slot(rect);
        }
    }

    /// Edge set relevant for the cursor at this position: the grabbed
    /// edges of an active resize, or the first non-empty edge bands
    /// topmost-first while no gesture runs.
    pub fn hovered_edges(&self, point: Point) -> Option<EdgeSet> {
        for slot in &self.slots {
            if let Some(edges) = slot.resize.active_edges() {
                return Some(edges);
            }
        }
        if self.gesture_active() {
            return None;
        }

        for slot in self.slots.iter().rev() {
            if collides_with_tolerance(slot.rect, point, self.tolerance) {
                let edges = collided_edges(slot.rect, point, self.tolerance);
                if !edges.is_empty() {
                    return Some(edges);
                }
            }
        }
        None
    }

    fn gesture_active(&self) -> bool {
        self.drag_create.is_active()
            || self
                .slots
                .iter()
                .any(|slot| slot.resize.is_resizing() || slot.movement.is_active())
    }
}
