//! Global constants for the slotmark application

use slotmark_ui::Color;

/// Default window width
pub const DEFAULT_WINDOW_WIDTH: u32 = 1024;

/// Default window height
pub const DEFAULT_WINDOW_HEIGHT: u32 = 768;

/// Minimum window width
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Minimum window height
pub const MIN_WINDOW_HEIGHT: u32 = 240;

/// Distance in logical pixels at which an edge can still be grabbed
pub const EDGE_TOLERANCE: f32 = 5.0;

/// Pointer travel before a press inside a slot body becomes a move
pub const MIN_DRAG_DISTANCE: f32 = 5.0;

/// Thickness of slot and preview borders
pub const SLOT_BORDER_WIDTH: f32 = 2.0;

/// Fill for slot bodies and the create preview
pub const SLOT_FILL: Color = Color::new(0.8, 0.9, 0.2, 0.4);

/// Border for slot outlines and the create preview
pub const SLOT_BORDER: Color = Color::new(0.8, 0.9, 0.2, 1.0);

/// Fill for selected slot bodies
pub const SELECTED_SLOT_FILL: Color = Color::new(1.0, 0.6, 0.2, 0.4);

/// Border for selected slot outlines
pub const SELECTED_SLOT_BORDER: Color = Color::new(1.0, 0.6, 0.2, 1.0);
