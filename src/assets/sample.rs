use std::sync::Arc;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{FieldError, FieldResult};

/// Decoded source image: immutable row-major RGB8 pixels, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSample {
    width: u32,
    height: u32,
    rgb8: Arc<Vec<u8>>,
}

impl ImageSample {
    /// Wrap raw row-major RGB8 bytes. Empty images are rejected.
    pub fn from_raw(width: u32, height: u32, rgb8: Vec<u8>) -> FieldResult<Self> {
        if width == 0 || height == 0 {
            return Err(FieldError::resource_load(format!(
                "image must be non-empty, got {width}x{height}"
            )));
        }
        let expected = (width as usize) * (height as usize) * 3;
        if rgb8.len() != expected {
            return Err(FieldError::resource_load(format!(
                "image byte length {} does not match {width}x{height} RGB8 ({expected})",
                rgb8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgb8: Arc::new(rgb8),
        })
    }

    /// A `width x height` image filled with one color.
    pub fn solid(width: u32, height: u32, color: Rgb8) -> FieldResult<Self> {
        let n = (width as usize) * (height as usize);
        let mut rgb8 = Vec::with_capacity(n * 3);
        for _ in 0..n {
            rgb8.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self::from_raw(width, height, rgb8)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at column `x`, row `y`; coordinates past the edge clamp to it.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        let o = (y * self.width as usize + x) * 3;
        Rgb8::new(self.rgb8[o], self.rgb8[o + 1], self.rgb8[o + 2])
    }

    /// Nearest source pixel for cell `(i, j)` of an `nx x ny` grid.
    ///
    /// Grid row 0 is the bottom of the plotted domain while image row 0 is the top, so the
    /// vertical index is flipped. The result is always inside `[0, W-1] x [0, H-1]`.
    pub fn grid_pixel(&self, i: u32, j: u32, nx: u32, ny: u32) -> (u32, u32) {
        let nx = nx.max(1);
        let ny = ny.max(1);
        let i = i.min(nx - 1);
        let j = j.min(ny - 1);

        let fx = f64::from(i) / f64::from(nx);
        let fy = f64::from(ny - 1 - j) / f64::from(ny);
        let px = (fx * f64::from(self.width - 1)).round() as u32;
        let py = (fy * f64::from(self.height - 1)).round() as u32;
        (px.min(self.width - 1), py.min(self.height - 1))
    }

    /// Color of the nearest source pixel for grid cell `(i, j)`.
    pub fn sample_cell(&self, i: u32, j: u32, nx: u32, ny: u32) -> Rgb8 {
        let (px, py) = self.grid_pixel(i, j, nx, ny);
        self.pixel(px, py)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sample.rs"]
mod tests;
