use std::f64::consts::TAU;

use crate::foundation::core::Point3;
use crate::foundation::error::{FieldError, FieldResult};

/// Shared amplitudes and frequencies of a Lissajous figure.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LissajousParams {
    /// Horizontal amplitude.
    pub amp_x: f64,
    /// Vertical amplitude.
    pub amp_y: f64,
    /// Horizontal frequency.
    pub freq_x: f64,
    /// Vertical frequency.
    pub freq_y: f64,
}

impl LissajousParams {
    /// Constants of the reference scene.
    pub const REFERENCE: Self = Self {
        amp_x: 3.5,
        amp_y: 2.0,
        freq_x: 3.0,
        freq_y: 2.0,
    };

    /// Reject non-finite or negative amplitudes and non-finite frequencies.
    pub fn validate(&self) -> FieldResult<()> {
        let all = [self.amp_x, self.amp_y, self.freq_x, self.freq_y];
        if !all.iter().all(|v| v.is_finite()) {
            return Err(FieldError::config("lissajous parameters must be finite"));
        }
        if self.amp_x < 0.0 || self.amp_y < 0.0 {
            return Err(FieldError::config("lissajous amplitudes must be >= 0"));
        }
        Ok(())
    }
}

impl Default for LissajousParams {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// `(amp_x * sin(freq_x * s + phase), amp_y * sin(freq_y * s), 0)`.
#[inline]
pub fn lissajous_point(s: f64, p: &LissajousParams, phase: f64) -> Point3 {
    Point3::new(
        p.amp_x * (p.freq_x * s + phase).sin(),
        p.amp_y * (p.freq_y * s).sin(),
        0.0,
    )
}

/// One member of a curve family: shared parameters plus its own constant phase offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LissajousCurve {
    /// Shape shared by the family.
    pub params: LissajousParams,
    /// Constant phase added on top of the shared phase.
    pub phase_offset: f64,
}

impl LissajousCurve {
    /// Curve with its own `phase_offset`.
    pub fn new(params: LissajousParams, phase_offset: f64) -> Self {
        Self {
            params,
            phase_offset,
        }
    }

    /// Point at curve parameter `s` with the shared `phase` added to this curve's offset.
    #[inline]
    pub fn point(&self, s: f64, phase: f64) -> Point3 {
        lissajous_point(s, &self.params, phase + self.phase_offset)
    }

    /// Replace `out` with `samples` points over `s` in `[0, 2pi)`.
    pub fn sample_into(&self, phase: f64, samples: usize, out: &mut Vec<Point3>) {
        out.clear();
        out.reserve(samples);
        let step = TAU / samples as f64;
        out.extend((0..samples).map(|k| self.point(k as f64 * step, phase)));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/lissajous.rs"]
mod tests;
