use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event::{
    ElementState, Event as WinitEvent, MouseButton as WinitMouseButton, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key as WinitKey, NamedKey};
use winit::window::{CursorIcon, Window, WindowBuilder};

use crate::cursor::CursorGlyph;
use crate::error::Result;
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::layout::Point;
use crate::renderer::Renderer;

/// The interface an application implements to be driven by [`run`].
pub trait Application: Sized {
    /// Window title used when [`Settings::window_title`] is not set.
    fn title(&self) -> String;

    /// Handle a translated input or window event.
    fn on_event(&mut self, event: Event);

    /// Cursor to show for the current application state.
    fn cursor(&self) -> CursorGlyph;

    /// Queue draw commands for one frame.
    fn draw(&self, renderer: &mut Renderer);
}

/// Window configuration for [`run`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub window_title: Option<String>,
    pub window_size: (u32, u32),
    pub min_window_size: Option<(u32, u32)>,
    pub resizable: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: None,
            window_size: (800, 600),
            min_window_size: None,
            resizable: true,
        }
    }
}

/// Open a window and run the application until the window closes.
pub fn run<A: Application + 'static>(mut app: A, settings: Settings) -> Result<()> {
    let event_loop = EventLoop::new()?;

    let title = match settings.window_title {
        Some(title) => title,
        None => app.title(),
    };
    let mut builder = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(LogicalSize::new(
            settings.window_size.0 as f64,
            settings.window_size.1 as f64,
        ))
        .with_resizable(settings.resizable);
    if let Some((min_width, min_height)) = settings.min_window_size {
        builder = builder.with_min_inner_size(LogicalSize::new(min_width as f64, min_height as f64));
    }
    let window = Arc::new(builder.build(&event_loop)?);

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

    let mut mouse_position = Point::zero();
    let mut modifiers = Modifiers::default();
    let mut current_cursor = CursorIcon::Default;

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        let WinitEvent::WindowEvent { event, window_id } = event else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                renderer.resize(size.width, size.height);
                app.on_event(Event::WindowResized {
                    width: size.width as f32,
                    height: size.height as f32,
                });
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                mouse_position = Point::new(position.x as f32, position.y as f32);
                app.on_event(Event::MouseMoved {
                    position: mouse_position,
                });
                update_cursor(&window, app.cursor(), &mut current_cursor);
                window.request_redraw();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = convert_mouse_button(button);
                let event = match state {
                    ElementState::Pressed => Event::MousePressed {
                        button,
                        position: mouse_position,
                    },
                    ElementState::Released => Event::MouseReleased {
                        button,
                        position: mouse_position,
                    },
                };
                app.on_event(event);
                update_cursor(&window, app.cursor(), &mut current_cursor);
                window.request_redraw();
            }
            WindowEvent::ModifiersChanged(state) => {
                modifiers = Modifiers {
                    shift: state.state().shift_key(),
                    ctrl: state.state().control_key(),
                    alt: state.state().alt_key(),
                    meta: state.state().super_key(),
                };
                app.on_event(Event::ModifiersChanged { modifiers });
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Some(key) = convert_key(&event.logical_key) {
                        app.on_event(Event::KeyPressed { key, modifiers });
                        window.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                app.draw(&mut renderer);
                renderer.render();
            }
            _ => {}
        }
    })?;

    Ok(())
}

fn convert_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(code) => MouseButton::Other(code),
    }
}

fn convert_key(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Named(NamedKey::Enter) => Some(Key::Enter),
        WinitKey::Named(NamedKey::Escape) => Some(Key::Escape),
        WinitKey::Named(NamedKey::Backspace) => Some(Key::Backspace),
        WinitKey::Named(NamedKey::Delete) => Some(Key::Delete),
        WinitKey::Named(NamedKey::Space) => Some(Key::Space),
        WinitKey::Character(text) => text.chars().next().map(Key::Char),
        _ => None,
    }
}

fn cursor_icon(glyph: CursorGlyph) -> CursorIcon {
    match glyph {
        CursorGlyph::Arrow => CursorIcon::Default,
        CursorGlyph::ResizeHorizontal => CursorIcon::EwResize,
        CursorGlyph::ResizeVertical => CursorIcon::NsResize,
        CursorGlyph::ResizeDiagonalNwse => CursorIcon::NwseResize,
        CursorGlyph::ResizeDiagonalNesw => CursorIcon::NeswResize,
    }
}

fn update_cursor(window: &Window, glyph: CursorGlyph, current: &mut CursorIcon) {
    let icon = cursor_icon(glyph);
    if icon != *current {
        window.set_cursor_icon(icon);
        *current = icon;
    }
}
