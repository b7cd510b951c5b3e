//! Slotmark application state and event handling.
//!
//! `SlotmarkApp` owns the loaded image and the slot canvas, translates
//! window events into canvas gestures, and draws the image with its
//! slot overlays each frame.

use slotmark_ui::{
    Application, Color, CursorGlyph, Event, ImageHandle, Key, Modifiers, MouseButton, Point,
    Rectangle, Renderer, Size,
};

use crate::canvas::SlotCanvas;
use crate::constants::{
    SELECTED_SLOT_BORDER, SELECTED_SLOT_FILL, SLOT_BORDER, SLOT_BORDER_WIDTH, SLOT_FILL,
};
use crate::edges::EdgeSet;
use crate::keybindings::{self, Action, KeyBindings};

/// Main application state.
pub struct SlotmarkApp {
    // === Image ===
    image: ImageHandle,
    image_name: String,

    // === Editing ===
    canvas: SlotCanvas,
    keybindings: KeyBindings,

    // === Input tracking ===
    modifiers: Modifiers,
    mouse_position: Point,
    cursor: CursorGlyph,
}

impl SlotmarkApp {
    /// Create the application for a decoded image.
    ///
    /// `container` is the initial window size; the canvas refits the
    /// image whenever the window is resized.
    pub fn new(
        image: ImageHandle,
        image_name: String,
        container: Size,
        edge_tolerance: f32,
    ) -> Self {
        let natural = Size::new(image.width() as f32, image.height() as f32);
        Self {
            image,
            image_name,
            canvas: SlotCanvas::new(natural, container, edge_tolerance),
            keybindings: KeyBindings::new(),
            modifiers: Modifiers::default(),
            mouse_position: Point::zero(),
            cursor: CursorGlyph::Arrow,
        }
    }

    // ========================================================================
    // Event Handlers
    // ========================================================================

    fn handle_mouse_pressed(&mut self, button: MouseButton, position: Point) {
        if button == MouseButton::Left {
            self.canvas
                .press(position, keybindings::create_modifier_held(self.modifiers));
            self.update_cursor();
        }
    }

    fn handle_mouse_released(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.canvas.release();
            self.update_cursor();
        }
    }

    fn handle_mouse_moved(&mut self, position: Point) {
        self.mouse_position = position;
        self.canvas.motion(position);
        self.update_cursor();
    }

    fn handle_key_pressed(&mut self, key: Key) {
        match self.keybindings.action_for_key(key) {
            Some(Action::DeleteSelection) => self.canvas.delete_selected(),
            None => {}
        }
    }

    fn handle_window_resized(&mut self, width: f32, height: f32) {
        self.canvas.on_container_resized(Size::new(width, height));
    }

    fn update_cursor(&mut self) {
        self.cursor = cursor_for_edges(self.canvas.hovered_edges(self.mouse_position));
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    fn draw_slot(renderer: &mut Renderer, rect: Rectangle, fill: Color, border: Color) {
        renderer.fill_rect(rect, fill);

        let top_left = rect.position();
        let top_right = Point::new(rect.right(), rect.y);
        let bottom_right = Point::new(rect.right(), rect.bottom());
        let bottom_left = Point::new(rect.x, rect.bottom());

        renderer.draw_line(top_left, top_right, SLOT_BORDER_WIDTH, border);
        renderer.draw_line(top_right, bottom_right, SLOT_BORDER_WIDTH, border);
        renderer.draw_line(bottom_right, bottom_left, SLOT_BORDER_WIDTH, border);
        renderer.draw_line(bottom_left, top_left, SLOT_BORDER_WIDTH, border);
    }
}

impl Application for SlotmarkApp {
    fn title(&self) -> String {
        format!("Slotmark - {}", self.image_name)
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::MousePressed { button, position } => {
                self.handle_mouse_pressed(button, position);
            }
            Event::MouseReleased { button, .. } => self.handle_mouse_released(button),
            Event::MouseMoved { position } => self.handle_mouse_moved(position),
            Event::KeyPressed { key, .. } => self.handle_key_pressed(key),
            Event::ModifiersChanged { modifiers } => self.modifiers = modifiers,
            Event::WindowResized { width, height } => self.handle_window_resized(width, height),
        }
    }

    fn cursor(&self) -> CursorGlyph {
        self.cursor
    }

    fn draw(&self, renderer: &mut Renderer) {
        renderer.draw_image(&self.image, self.canvas.image_area());

        for slot in self.canvas.slots() {
            let (fill, border) = if slot.selected {
                (SELECTED_SLOT_FILL, SELECTED_SLOT_BORDER)
            } else {
                (SLOT_FILL, SLOT_BORDER)
            };
            Self::draw_slot(renderer, slot.rect, fill, border);
        }

        if let Some(preview) = self.canvas.preview() {
            Self::draw_slot(renderer, preview, SLOT_FILL, SLOT_BORDER);
        }
    }
}

/// Cursor glyph for a hovered or grabbed edge set.
fn cursor_for_edges(edges: Option<EdgeSet>) -> CursorGlyph {
    let Some(edges) = edges else {
        return CursorGlyph::Arrow;
    };
    if edges.is_empty() {
        CursorGlyph::Arrow
    } else if (edges.north && edges.west) || (edges.south && edges.east) {
        CursorGlyph::ResizeDiagonalNwse
    } else if (edges.north && edges.east) || (edges.south && edges.west) {
        CursorGlyph::ResizeDiagonalNesw
    } else if edges.north || edges.south {
        CursorGlyph::ResizeVertical
    } else {
        CursorGlyph::ResizeHorizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// A 4x3 image in a 400x300 window fills the container exactly.
    fn test_app() -> SlotmarkApp {
        let image = ImageHandle::from_rgba8(vec![0; 4 * 3 * 4], 4, 3);
        SlotmarkApp::new(image, "test.png".to_string(), Size::new(400.0, 300.0), 5.0)
    }

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Modifiers::default()
        }
    }

    fn create_slot(app: &mut SlotmarkApp, from: Point, to: Point) {
        app.on_event(Event::ModifiersChanged { modifiers: ctrl() });
        app.on_event(Event::MousePressed {
            button: MouseButton::Left,
            position: from,
        });
        app.on_event(Event::MouseMoved { position: to });
        app.on_event(Event::MouseReleased {
            button: MouseButton::Left,
            position: to,
        });
        app.on_event(Event::ModifiersChanged {
            modifiers: Modifiers::default(),
        });
    }

    #[test]
    fn test_event_flow_creates_slot() {
        let mut app = test_app();
        create_slot(&mut app, Point::new(50.0, 50.0), Point::new(150.0, 120.0));

        let slots = app.canvas.slots();
        assert_eq!(slots.len(), 1);
        assert!(approx_eq(slots[0].rect.x, 50.0));
        assert!(approx_eq(slots[0].rect.y, 50.0));
        assert!(approx_eq(slots[0].rect.width, 100.0));
        assert!(approx_eq(slots[0].rect.height, 70.0));
    }

    #[test]
    fn test_press_without_modifier_creates_nothing() {
        let mut app = test_app();
        app.on_event(Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(50.0, 50.0),
        });
        app.on_event(Event::MouseMoved {
            position: Point::new(150.0, 120.0),
        });
        app.on_event(Event::MouseReleased {
            button: MouseButton::Left,
            position: Point::new(150.0, 120.0),
        });

        assert!(app.canvas.slots().is_empty());
    }

    #[test]
    fn test_delete_key_removes_selected_slot() {
        let mut app = test_app();
        create_slot(&mut app, Point::new(50.0, 50.0), Point::new(150.0, 120.0));

        // A click inside the slot toggles its selection.
        app.on_event(Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(100.0, 80.0),
        });
        app.on_event(Event::MouseReleased {
            button: MouseButton::Left,
            position: Point::new(100.0, 80.0),
        });
        assert!(app.canvas.slots()[0].selected);

        app.on_event(Event::KeyPressed {
            key: Key::Delete,
            modifiers: Modifiers::default(),
        });
        assert!(app.canvas.slots().is_empty());
    }

    #[test]
    fn test_delete_key_keeps_unselected_slots() {
        let mut app = test_app();
        create_slot(&mut app, Point::new(50.0, 50.0), Point::new(150.0, 120.0));

        app.on_event(Event::KeyPressed {
            key: Key::Delete,
            modifiers: Modifiers::default(),
        });
        assert_eq!(app.canvas.slots().len(), 1);
    }

    #[test]
    fn test_window_resize_rescales_slots() {
        let mut app = test_app();
        create_slot(&mut app, Point::new(50.0, 50.0), Point::new(150.0, 120.0));

        app.on_event(Event::WindowResized {
            width: 800.0,
            height: 600.0,
        });

        let rect = app.canvas.slots()[0].rect;
        assert!(approx_eq(rect.x, 100.0));
        assert!(approx_eq(rect.y, 100.0));
        assert!(approx_eq(rect.width, 200.0));
        assert!(approx_eq(rect.height, 140.0));
    }

    #[test]
    fn test_cursor_follows_hovered_edges() {
        let mut app = test_app();
        create_slot(&mut app, Point::new(50.0, 50.0), Point::new(150.0, 120.0));

        // Interior, away from every edge band.
        app.on_event(Event::MouseMoved {
            position: Point::new(100.0, 85.0),
        });
        assert_eq!(app.cursor(), CursorGlyph::Arrow);

        // West edge midpoint.
        app.on_event(Event::MouseMoved {
            position: Point::new(50.0, 85.0),
        });
        assert_eq!(app.cursor(), CursorGlyph::ResizeHorizontal);

        // North edge midpoint.
        app.on_event(Event::MouseMoved {
            position: Point::new(100.0, 50.0),
        });
        assert_eq!(app.cursor(), CursorGlyph::ResizeVertical);

        // Away from any slot.
        app.on_event(Event::MouseMoved {
            position: Point::new(300.0, 250.0),
        });
        assert_eq!(app.cursor(), CursorGlyph::Arrow);
    }

    #[test]
    fn test_cursor_mapping_for_corners() {
        let nw = EdgeSet {
            north: true,
            west: true,
            ..EdgeSet::default()
        };
        let se = EdgeSet {
            south: true,
            east: true,
            ..EdgeSet::default()
        };
        let ne = EdgeSet {
            north: true,
            east: true,
            ..EdgeSet::default()
        };
        let sw = EdgeSet {
            south: true,
            west: true,
            ..EdgeSet::default()
        };

        assert_eq!(cursor_for_edges(Some(nw)), CursorGlyph::ResizeDiagonalNwse);
        assert_eq!(cursor_for_edges(Some(se)), CursorGlyph::ResizeDiagonalNwse);
        assert_eq!(cursor_for_edges(Some(ne)), CursorGlyph::ResizeDiagonalNesw);
        assert_eq!(cursor_for_edges(Some(sw)), CursorGlyph::ResizeDiagonalNesw);
        assert_eq!(cursor_for_edges(None), CursorGlyph::Arrow);
    }

    #[test]
    fn test_cursor_sticks_while_resizing() {
        let mut app = test_app();
        create_slot(&mut app, Point::new(50.0, 50.0), Point::new(150.0, 120.0));

        // Grab the west edge and drag far inside the slot.
        app.on_event(Event::MouseMoved {
            position: Point::new(50.0, 85.0),
        });
        app.on_event(Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(50.0, 85.0),
        });
        app.on_event(Event::MouseMoved {
            position: Point::new(100.0, 85.0),
        });
        assert_eq!(app.cursor(), CursorGlyph::ResizeHorizontal);

        app.on_event(Event::MouseReleased {
            button: MouseButton::Left,
            position: Point::new(100.0, 85.0),
        });
    }
}
