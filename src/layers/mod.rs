use crate::foundation::core::Rect;
use crate::foundation::error::{FieldError, FieldResult};

pub(crate) mod continuous;
pub(crate) mod lissajous_family;
pub(crate) mod pulse_grid;
pub(crate) mod tiled;
pub(crate) mod trail;

/// Domains are `[x0, x1] x [y0, y1]` with `u` along x and `v` along y; both spans must be
/// positive and finite.
pub(crate) fn validate_domain(domain: Rect) -> FieldResult<()> {
    let finite = [domain.x0, domain.y0, domain.x1, domain.y1]
        .iter()
        .all(|v| v.is_finite());
    if !finite || domain.x1 <= domain.x0 || domain.y1 <= domain.y0 {
        return Err(FieldError::config(format!(
            "domain must have positive finite extent, got [{}, {}] x [{}, {}]",
            domain.x0, domain.x1, domain.y0, domain.y1
        )));
    }
    Ok(())
}

/// `[-half, half]^2`.
pub fn square_domain(half: f64) -> Rect {
    Rect::new(-half, -half, half, half)
}
