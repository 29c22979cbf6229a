use crate::foundation::core::Rgb8;
use crate::foundation::error::{FieldError, FieldResult};

pub(crate) fn ensure_finite(what: &str, v: f64) -> FieldResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FieldError::numeric_domain(format!(
            "{what} must be finite, got {v}"
        )))
    }
}

pub(crate) fn ensure_positive(what: &str, v: f64) -> FieldResult<f64> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(FieldError::config(format!("{what} must be > 0, got {v}")))
    }
}

/// Sample a piecewise-linear color gradient at `t` in `[0, 1]`.
///
/// An empty stop list yields black; a single stop is returned as-is.
pub(crate) fn gradient_at(stops: &[Rgb8], t: f64) -> Rgb8 {
    match stops {
        [] => Rgb8::new(0, 0, 0),
        [only] => *only,
        _ => {
            let span = (stops.len() - 1) as f64;
            let x = t.clamp(0.0, 1.0) * span;
            let i = (x.floor() as usize).min(stops.len() - 2);
            stops[i].lerp(stops[i + 1], x - i as f64)
        }
    }
}

/// Fraction `i / (n - 1)` used to spread `n` items over a gradient.
pub(crate) fn spread(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
