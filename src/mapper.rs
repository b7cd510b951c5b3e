//! Container/image coordinate mapping.
//!
//! Slots live in two coordinate spaces: absolute container pixels for
//! hit-testing and drawing, and fractions of the displayed image that
//! survive container resizes. This module converts between the two.

use slotmark_ui::{Rectangle, Size};

/// A rectangle expressed as fractions of the displayed image area.
///
/// Values are not clamped to 0..=1; a rectangle partly outside the
/// displayed image keeps fractions outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeRectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RelativeRectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Size the image is drawn at inside the container: uniform scale,
/// preserving aspect ratio. Small images are scaled up.
///
/// Degenerate inputs (zero or negative extent on either side) yield a
/// zero size instead of NaN.
pub fn fit_display_size(natural: Size, container: Size) -> Size {
    if natural.width <= 0.0
        || natural.height <= 0.0
        || container.width <= 0.0
        || container.height <= 0.0
    {
        return Size::zero();
    }

    let scale = (container.width / natural.width).min(container.height / natural.height);
    Size::new(natural.width * scale, natural.height * scale)
}

/// Offsets of the displayed image from the container origin.
///
/// The image is centered, so each margin is half the leftover space on
/// that axis, and zero when the image fills the axis.
pub fn container_margins(container: Size, display: Size) -> (f32, f32) {
    (
        ((container.width - display.width) / 2.0).max(0.0),
        ((container.height - display.height) / 2.0).max(0.0),
    )
}

/// Convert an absolute container-space rectangle to image fractions.
pub fn to_relative(rect: Rectangle, container: Size, display: Size) -> RelativeRectangle {
    let (margin_x, margin_y) = container_margins(container, display);

    RelativeRectangle::new(
        (rect.x - margin_x) / display.width,
        (rect.y - margin_y) / display.height,
        rect.width / display.width,
        rect.height / display.height,
    )
}

/// Convert image fractions back to an absolute container-space rectangle.
///
/// Inverse of [`to_relative`] for the same container and display sizes.
pub fn to_absolute(rel: RelativeRectangle, container: Size, display: Size) -> Rectangle {
    let (margin_x, margin_y) = container_margins(container, display);

    Rectangle::new(
        rel.x * display.width + margin_x,
        rel.y * display.height + margin_y,
        rel.width * display.width,
        rel.height * display.height,
    )
}
