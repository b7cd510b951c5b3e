use std::sync::Arc;

/// A handle to decoded RGBA8 image data shared with the renderer.
///
/// Cloning is cheap; the renderer caches the GPU texture per handle so the
/// pixels are uploaded once.
#[derive(Clone, Debug)]
pub struct ImageHandle {
    data: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl ImageHandle {
    /// Create a new image handle from RGBA8 data (4 bytes per pixel).
    ///
    /// # Panics
    /// Panics if `data.len() != width * height * 4`.
    pub fn from_rgba8(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "Image data size mismatch"
        );

        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Get the image data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the image width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    pub fn height(&self) -> u32 {
        self.height
    }
}
