use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::ensure_finite;

/// Travelling-wave height field over a 2D domain:
///
/// `z(u, v, t) = amp_u * sin(k_u * u + omega_u * t) + amp_v * cos(k_v * v - omega_v * t)`
///
/// The constants are visual defaults, not physical quantities; any finite set is accepted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeightField {
    /// Amplitude of the `u` wave.
    pub amp_u: f64,
    /// Amplitude of the `v` wave.
    pub amp_v: f64,
    /// Wavenumber along `u`.
    pub k_u: f64,
    /// Wavenumber along `v`.
    pub k_v: f64,
    /// Angular speed of the `u` wave.
    pub omega_u: f64,
    /// Angular speed of the `v` wave.
    pub omega_v: f64,
}

impl HeightField {
    /// Constants of the reference scenes.
    pub const REFERENCE: Self = Self {
        amp_u: 0.35,
        amp_v: 0.35,
        k_u: 2.2,
        k_v: 2.2,
        omega_u: 1.2,
        omega_v: 0.9,
    };

    /// Reject non-finite constants.
    pub fn validate(&self) -> FieldResult<()> {
        let all = [
            self.amp_u,
            self.amp_v,
            self.k_u,
            self.k_v,
            self.omega_u,
            self.omega_v,
        ];
        if all.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(FieldError::config("height field constants must be finite"))
        }
    }

    /// Elevation at `(u, v)` and time `t`. Total over finite inputs.
    #[inline]
    pub fn height(&self, u: f64, v: f64, t: f64) -> f64 {
        self.amp_u * (self.k_u * u + self.omega_u * t).sin()
            + self.amp_v * (self.k_v * v - self.omega_v * t).cos()
    }

    /// [`HeightField::height`] with non-finite inputs rejected instead of propagated.
    pub fn height_checked(&self, u: f64, v: f64, t: f64) -> FieldResult<f64> {
        let u = ensure_finite("u", u)?;
        let v = ensure_finite("v", v)?;
        let t = ensure_finite("t", t)?;
        Ok(self.height(u, v, t))
    }

    /// Upper bound on `|height|` for every input.
    pub fn bound(&self) -> f64 {
        self.amp_u.abs() + self.amp_v.abs()
    }
}

impl Default for HeightField {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// The reference surface: [`HeightField::REFERENCE`] evaluated at `(u, v, t)`.
pub fn surface_height(u: f64, v: f64, t: f64) -> f64 {
    HeightField::REFERENCE.height(u, v, t)
}

#[cfg(test)]
#[path = "../../tests/unit/field/height.rs"]
mod tests;
