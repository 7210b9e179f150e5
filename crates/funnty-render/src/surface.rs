//! Surface - logical-pixel raster target

use funnty_text::Rect;
use tiny_skia::{IntRect, Pixmap};

use crate::{Color, RenderError, Result};

/// Raster target sized in logical pixels.
///
/// The backing pixmap is `logical size * device_pixel_ratio` device pixels,
/// fixed when the surface is created or resized. A surface with zero area
/// has no pixmap; drawing to it is a no-op.
pub struct Surface {
    pixmap: Option<Pixmap>,
    width: f32,
    height: f32,
    device_pixel_ratio: f32,
}

impl Surface {
    /// Create a transparent surface
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Result<Self> {
        let mut surface = Self {
            pixmap: None,
            width: 0.0,
            height: 0.0,
            device_pixel_ratio: 1.0,
        };
        surface.resize(width, height, device_pixel_ratio)?;
        Ok(surface)
    }

    /// Reallocate for a new logical size and ratio; previous pixels are lost
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) -> Result<()> {
        let valid = width.is_finite() && width >= 0.0
            && height.is_finite() && height >= 0.0
            && device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0;
        if !valid {
            return Err(RenderError::InvalidSurface { width, height, ratio: device_pixel_ratio });
        }

        // Truncate like a canvas width/height assignment
        let device_width = (width * device_pixel_ratio) as u32;
        let device_height = (height * device_pixel_ratio) as u32;

        self.pixmap = Pixmap::new(device_width, device_height);
        self.width = width;
        self.height = height;
        self.device_pixel_ratio = device_pixel_ratio;
        Ok(())
    }

    /// Logical width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Logical height
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    pub fn device_width(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, Pixmap::width)
    }

    pub fn device_height(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, Pixmap::height)
    }

    pub fn is_zero_area(&self) -> bool {
        self.pixmap.is_none()
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    pub fn pixmap_mut(&mut self) -> Option<&mut Pixmap> {
        self.pixmap.as_mut()
    }

    /// Reset every pixel to transparent
    pub fn clear(&mut self) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(tiny_skia::Color::TRANSPARENT);
        }
    }

    /// Fill every pixel with `color`
    pub fn fill(&mut self, color: Color) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(color.to_tiny_skia());
        }
    }

    /// Un-premultiplied colour of a device pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Copy of the region `rect` (logical pixels), clipped to the surface.
    ///
    /// `None` when the clipped region is empty.
    pub fn crop(&self, rect: Rect) -> Option<Surface> {
        let pixmap = self.pixmap.as_ref()?;
        let ratio = self.device_pixel_ratio;

        let left = (rect.x * ratio).floor().max(0.0) as i32;
        let top = (rect.y * ratio).floor().max(0.0) as i32;
        let right = ((rect.right() * ratio).ceil() as i32).min(pixmap.width() as i32);
        let bottom = ((rect.bottom() * ratio).ceil() as i32).min(pixmap.height() as i32);

        let region = IntRect::from_ltrb(left, top, right, bottom)?;
        let cropped = pixmap.clone_rect(region)?;

        Some(Surface {
            width: cropped.width() as f32 / ratio,
            height: cropped.height() as f32 / ratio,
            device_pixel_ratio: ratio,
            pixmap: Some(cropped),
        })
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("device_pixel_ratio", &self.device_pixel_ratio)
            .field("device_width", &self.device_width())
            .field("device_height", &self.device_height())
            .finish()
    }
}
