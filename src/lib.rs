//! Slotmark - sprite sheet slot marker.
//!
//! A desktop tool for drawing, moving, and resizing rectangular slots
//! over a bitmap image. Slot positions are kept as fractions of the
//! displayed image, so they survive window resizes.

pub mod app;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod drag_create;
pub mod drag_move;
pub mod edges;
pub mod geometry;
pub mod keybindings;
pub mod mapper;
pub mod resize;
pub mod slot;

pub use app::SlotmarkApp;
pub use canvas::SlotCanvas;
pub use config::AppConfig;
pub use slot::Slot;
