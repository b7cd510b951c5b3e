//! Minimal windowing and 2D drawing layer for slotmark.
//!
//! Wraps winit and wgpu behind an [`Application`] trait: implement the
//! trait, hand an instance to [`run`], and receive translated input
//! events plus a [`Renderer`] to queue rectangles, lines and images on.

pub mod application;
pub mod color_pipeline;
pub mod context;
pub mod cursor;
pub mod error;
pub mod event;
pub mod image;
pub mod layout;
pub mod renderer;
pub mod texture;
pub mod texture_pipeline;

pub use application::{run, Application, Settings};
pub use cursor::CursorGlyph;
pub use error::{Result, UiError};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use image::ImageHandle;
pub use layout::{Point, Rectangle, Size};
pub use renderer::{Color, Renderer};
