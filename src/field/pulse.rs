use crate::foundation::error::{FieldError, FieldResult};

/// Radial travelling wave used to size pulse markers.
///
/// `intensity(d, t) = center + swing * sin(k * d - omega * t)` and
/// `scale(d, t) = floor + amplitude * intensity(d, t)`.
///
/// The scale is a floor plus a scaled amplitude, never clamped after the fact.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PulseWave {
    /// Wavenumber over distance from the source.
    pub k: f64,
    /// Angular speed.
    pub omega: f64,
    /// Midpoint of the intensity.
    pub center: f64,
    /// Half-range of the intensity.
    pub swing: f64,
    /// Scale at zero intensity.
    pub floor: f64,
    /// Scale gained per unit of intensity.
    pub amplitude: f64,
}

impl PulseWave {
    /// Constants of the reference scene.
    pub const REFERENCE: Self = Self {
        k: 2.5,
        omega: 2.2,
        center: 0.5,
        swing: 0.45,
        floor: 0.18,
        amplitude: 0.12,
    };

    /// Reject non-finite constants.
    pub fn validate(&self) -> FieldResult<()> {
        let all = [
            self.k,
            self.omega,
            self.center,
            self.swing,
            self.floor,
            self.amplitude,
        ];
        if all.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(FieldError::config("pulse wave constants must be finite"))
        }
    }

    /// `center + swing * sin(k * d - omega * t)`.
    #[inline]
    pub fn intensity(&self, d: f64, t: f64) -> f64 {
        self.center + self.swing * (self.k * d - self.omega * t).sin()
    }

    /// Marker scale at distance `d` and time `t`.
    #[inline]
    pub fn scale(&self, d: f64, t: f64) -> f64 {
        self.floor + self.amplitude * self.intensity(d, t)
    }

    /// Closed interval every [`PulseWave::scale`] value falls in.
    pub fn scale_range(&self) -> (f64, f64) {
        let lo = self.center - self.swing.abs();
        let hi = self.center + self.swing.abs();
        let a = self.floor + self.amplitude * lo;
        let b = self.floor + self.amplitude * hi;
        (a.min(b), a.max(b))
    }
}

impl Default for PulseWave {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/pulse.rs"]
mod tests;
