//! Circular glyph drawn onto placeholder icons
//!
//! The glyph is a filled ellipse inscribed in an inclusive pixel bounding box,
//! stroked with a one pixel outline. Pixels are classified by where their
//! centre falls, so the result is a hard-edged shape with no anti-aliasing.

use image::{Rgba, RgbaImage};

/// Ellipse described by an inclusive pixel bounding box.
///
/// `left..=right` and `top..=bottom` are the first and last pixel columns and
/// rows the ellipse may paint. The shape itself spans the outer edges of those
/// pixels, so a box of `4..=28` covers 25 pixels across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Ellipse {
    /// Returns the bounding box `[margin, margin, width - margin, height - margin]`.
    ///
    /// Returns `None` when the margin leaves no room on either axis, that is
    /// when `2 * margin >= width` or `2 * margin >= height`.
    pub fn inscribed(width: u32, height: u32, margin: u32) -> Option<Self> {
        let inset = margin.checked_mul(2)?;
        if inset >= width || inset >= height {
            return None;
        }

        Some(Self {
            left: margin,
            top: margin,
            right: width - margin,
            bottom: height - margin,
        })
    }

    fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right + 1) as f32 / 2.0,
            (self.top + self.bottom + 1) as f32 / 2.0,
        )
    }

    fn radii(&self) -> (f32, f32) {
        (
            (self.right - self.left + 1) as f32 / 2.0,
            (self.bottom - self.top + 1) as f32 / 2.0,
        )
    }

    /// Whether the pixel at `(x, y)` is painted (fill or outline).
    pub fn contains(&self, x: u32, y: u32) -> bool {
        if x < self.left || x > self.right || y < self.top || y > self.bottom {
            return false;
        }
        let (cx, cy) = self.center();
        let (rx, ry) = self.radii();
        let dx = (x as f32 + 0.5 - cx) / rx;
        let dy = (y as f32 + 0.5 - cy) / ry;
        dx * dx + dy * dy <= 1.0
    }

    /// Whether the pixel at `(x, y)` is painted and so are its four neighbours.
    ///
    /// Painted pixels failing this form the outline, a closed ring one pixel
    /// wide whatever the aspect ratio.
    pub fn contains_interior(&self, x: u32, y: u32) -> bool {
        let painted = |x: Option<u32>, y: Option<u32>| match (x, y) {
            (Some(x), Some(y)) => self.contains(x, y),
            _ => false,
        };

        self.contains(x, y)
            && painted(x.checked_sub(1), Some(y))
            && painted(x.checked_add(1), Some(y))
            && painted(Some(x), y.checked_sub(1))
            && painted(Some(x), y.checked_add(1))
    }

    /// Paint the ellipse onto `canvas`.
    ///
    /// Interior pixels get `fill` and the ring around them gets `outline`.
    /// Everything outside the ellipse is left untouched and the box is
    /// clipped to the canvas.
    pub fn draw(&self, canvas: &mut RgbaImage, fill: Rgba<u8>, outline: Rgba<u8>) {
        let right = self.right.min(canvas.width().saturating_sub(1));
        let bottom = self.bottom.min(canvas.height().saturating_sub(1));
        if canvas.width() == 0 || canvas.height() == 0 {
            return;
        }

        for y in self.top..=bottom {
            for x in self.left..=right {
                if !self.contains(x, y) {
                    continue;
                }
                let color = if self.contains_interior(x, y) {
                    fill
                } else {
                    outline
                };
                canvas.put_pixel(x, y, color);
            }
        }
    }
}
