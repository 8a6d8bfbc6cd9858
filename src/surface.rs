//! Drawing surfaces.
//!
//! The engine only needs two things from a surface: wipe it, and paint a
//! filled circle with an opacity. [`Surface`] is that seam; everything else
//! (windowing, GPU plumbing, pixel formats) stays on the implementation
//! side.
//!
//! Two implementations ship with the crate:
//!
//! | Type | Backing | Use |
//! |------|---------|-----|
//! | [`Pixmap`] | CPU RGBA buffer | tests, benches, headless capture |
//! | the window surface | wgpu instanced quads | the windowed demo |

use crate::error::CaptureError;
use crate::visuals::Color;
use glam::Vec2;
use std::path::Path;

/// Background behind the particles, shared by both surface backends.
pub const CLEAR_COLOR: Color = Color::rgb(0.02, 0.02, 0.05);

/// Minimal drawing interface the particle core renders through.
///
/// Coordinates are surface-local pixels, origin top-left, y down.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Wipe the whole surface to the background color.
    fn clear(&mut self);

    /// Paint a filled circle blended over the current contents.
    ///
    /// `alpha` is an opacity in `[0, 1]`; implementations clamp it. Circles
    /// partially or fully off-surface are clipped, never an error.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32);
}

/// CPU raster surface: a plain RGBA8 buffer.
///
/// Pixel-exact and windowless, which is what the test suite and the
/// `--headless` capture path want. Circles are rasterized row by row with
/// source-over blending.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Pixmap {
    /// Create a pixmap wiped to the background color.
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixmap = Self {
            width,
            height,
            pixels: vec![[0; 4]; (width as usize) * (height as usize)],
        };
        pixmap.clear();
        pixmap
    }

    /// Read one pixel as RGBA bytes.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[(y * self.width + x) as usize]
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write the current contents as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), CaptureError> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec())
            .ok_or(CaptureError::BufferSize)?;
        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    fn blend(&mut self, x: u32, y: u32, src: [u8; 4]) {
        let a = src[3] as u32;
        let inv = 255 - a;
        let dst = &mut self.pixels[(y * self.width + x) as usize];
        for c in 0..3 {
            dst[c] = ((src[c] as u32 * a + dst[c] as u32 * inv + 127) / 255) as u8;
        }
        // The backing buffer stays opaque; alpha only weights the blend.
    }
}

impl Surface for Pixmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        let px = CLEAR_COLOR.to_rgba8(1.0);
        self.pixels.fill(px);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 || !(radius > 0.0) {
            return;
        }

        let src = color.to_rgba8(alpha);
        let r2 = radius * radius;

        // Bounding box clamped to the surface; saturating float->int casts
        // make off-surface circles clip cleanly.
        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = ((center.x + radius).ceil() as i64).clamp(0, self.width as i64) as u32;
        let y1 = ((center.y + radius).ceil() as i64).clamp(0, self.height as i64) as u32;

        for y in y0..y1 {
            let dy = (y as f32 + 0.5) - center.y;
            for x in x0..x1 {
                let dx = (x as f32 + 0.5) - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, src);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_fills_background() {
        let mut pixmap = Pixmap::new(4, 4);
        pixmap.fill_circle(Vec2::new(2.0, 2.0), 3.0, Color::WHITE, 1.0);
        pixmap.clear();
        let bg = CLEAR_COLOR.to_rgba8(1.0);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(pixmap.pixel(x, y), bg);
            }
        }
    }

    #[test]
    fn test_opaque_circle_covers_center() {
        let mut pixmap = Pixmap::new(16, 16);
        pixmap.fill_circle(Vec2::new(8.0, 8.0), 3.0, Color::rgb(1.0, 0.0, 0.0), 1.0);
        let px = pixmap.pixel(8, 8);
        assert_eq!(px[0], 255);
        assert_eq!(px[1], 0);
        // Corner well outside the radius stays background.
        assert_eq!(pixmap.pixel(0, 0), CLEAR_COLOR.to_rgba8(1.0));
    }

    #[test]
    fn test_half_alpha_blends_toward_color() {
        let mut pixmap = Pixmap::new(8, 8);
        pixmap.fill_circle(Vec2::new(4.0, 4.0), 2.0, Color::WHITE, 0.5);
        let px = pixmap.pixel(4, 4);
        let bg = CLEAR_COLOR.to_rgba8(1.0)[0] as i32;
        // Roughly halfway between background and white.
        let expected = (bg + 255) / 2;
        assert!((px[0] as i32 - expected).abs() <= 2);
    }

    #[test]
    fn test_offscreen_circle_is_clipped() {
        let mut pixmap = Pixmap::new(8, 8);
        pixmap.fill_circle(Vec2::new(-100.0, -100.0), 5.0, Color::WHITE, 1.0);
        pixmap.fill_circle(Vec2::new(7.5, 4.0), 4.0, Color::WHITE, 1.0);
        // No panic, and the fully-offscreen circle left nothing behind.
        assert_eq!(pixmap.pixel(0, 0), CLEAR_COLOR.to_rgba8(1.0));
        assert_eq!(pixmap.pixel(7, 4)[0], 255);
    }

    #[test]
    fn test_zero_alpha_and_degenerate_radius_are_noops() {
        let mut pixmap = Pixmap::new(8, 8);
        let before = pixmap.clone();
        pixmap.fill_circle(Vec2::new(4.0, 4.0), 3.0, Color::WHITE, 0.0);
        pixmap.fill_circle(Vec2::new(4.0, 4.0), -2.0, Color::WHITE, 1.0);
        pixmap.fill_circle(Vec2::new(4.0, 4.0), f32::NAN, Color::WHITE, 1.0);
        assert_eq!(pixmap.as_bytes(), before.as_bytes());
    }
}
