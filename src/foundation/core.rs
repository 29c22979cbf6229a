use crate::foundation::error::{FieldError, FieldResult};

pub use kurbo::{Point, Rect, Vec2};

/// Zero-based index of an emitted frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames per second as a rational `num / den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator (must be > 0).
    pub den: u32,
}

impl Fps {
    /// Create a validated frame rate. Both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> FieldResult<Self> {
        if den == 0 {
            return Err(FieldError::config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FieldError::config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frame rate as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Start time of frame number `frames`.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Number of frames a span of `secs` occupies, rounded to the nearest frame and never zero.
    ///
    /// Spans that are not positive and finite, or whose frame count does not fit in a `u64`,
    /// are rejected.
    pub fn frames_for_span(self, secs: f64) -> FieldResult<u64> {
        if !(secs.is_finite() && secs > 0.0) {
            return Err(FieldError::config(format!(
                "span must be positive and finite, got {secs}"
            )));
        }
        let frames = (secs * self.as_f64()).round().max(1.0);
        // 2^64: the smallest f64 that no longer fits in a u64.
        if !frames.is_finite() || frames >= 18_446_744_073_709_551_616.0 {
            return Err(FieldError::config(format!(
                "span of {secs}s at {} fps has too many frames",
                self.as_f64()
            )));
        }
        Ok(frames as u64)
    }
}

/// Straight (non-premultiplied) RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb8 {
    /// Color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Linear blend towards `other` by `t` in `[0, 1]`, rounded per channel.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn ch(a: u8, b: u8, t: f64) -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        }
        let t = t.clamp(0.0, 1.0);
        Self {
            r: ch(self.r, other.r, t),
            g: ch(self.g, other.g, t),
            b: ch(self.b, other.b, t),
        }
    }
}

/// Position in scene space. `z` is elevation for surfaces and `0` for planar primitives.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Elevation.
    pub z: f64,
}

impl Point3 {
    /// `(0, 0, 0)`.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Projection onto the `z = 0` plane.
    pub fn xy(self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
