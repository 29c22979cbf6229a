use rayon::prelude::*;

use crate::field::pulse::PulseWave;
use crate::foundation::core::{Point, Point3, Rgb8};
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::{ensure_finite, gradient_at, spread};
use crate::scene::frame::Primitive;

/// Lattice layout, wave constants and color stops for a [`RadialPulseGrid`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PulseGridConfig {
    /// Lattice rows.
    pub rows: u32,
    /// Lattice columns.
    pub cols: u32,
    /// Distance between neighbours.
    pub spacing: f64,
    /// Wave driving marker scales.
    pub wave: PulseWave,
    /// Gradient stops spread over the markers in row-major order.
    pub colors: Vec<Rgb8>,
}

impl Default for PulseGridConfig {
    fn default() -> Self {
        Self {
            rows: 12,
            cols: 22,
            spacing: 0.6,
            wave: PulseWave::REFERENCE,
            colors: crate::scene::palette::PULSE_GRADIENT.to_vec(),
        }
    }
}

/// One lattice marker.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PulseMarker {
    /// Fixed lattice position.
    pub position: Point,
    /// Fixed gradient color.
    pub color: Rgb8,
    /// Current scale.
    pub scale: f64,
}

/// Fixed lattice of markers pulsing with a wave radiating from a movable source point.
///
/// Markers never move; only their scale changes.
#[derive(Clone, Debug)]
pub struct RadialPulseGrid {
    rows: u32,
    cols: u32,
    wave: PulseWave,
    markers: Vec<PulseMarker>,
    source: Point,
}

impl RadialPulseGrid {
    /// Lay out `rows x cols` markers centered on the origin. Scales start at `t = 0` with the
    /// source at the origin.
    pub fn new(cfg: &PulseGridConfig) -> FieldResult<Self> {
        if cfg.rows == 0 || cfg.cols == 0 {
            return Err(FieldError::config(format!(
                "pulse grid lattice must be > 0, got {}x{}",
                cfg.rows, cfg.cols
            )));
        }
        if !(cfg.spacing.is_finite() && cfg.spacing > 0.0) {
            return Err(FieldError::config(format!(
                "pulse grid spacing must be > 0, got {}",
                cfg.spacing
            )));
        }
        cfg.wave.validate()?;

        let n = cfg.rows as usize * cfg.cols as usize;
        let half_w = f64::from(cfg.cols - 1) / 2.0;
        let half_h = f64::from(cfg.rows - 1) / 2.0;
        let mut markers = Vec::with_capacity(n);
        for j in 0..cfg.rows {
            for i in 0..cfg.cols {
                let position = Point::new(
                    (f64::from(i) - half_w) * cfg.spacing,
                    (f64::from(j) - half_h) * cfg.spacing,
                );
                let color = gradient_at(&cfg.colors, spread(markers.len(), n));
                markers.push(PulseMarker {
                    position,
                    color,
                    scale: cfg.wave.scale(position.distance(Point::ORIGIN), 0.0),
                });
            }
        }

        Ok(Self {
            rows: cfg.rows,
            cols: cfg.cols,
            wave: cfg.wave,
            markers,
            source: Point::ORIGIN,
        })
    }

    /// Rescale every marker for time `t` with the wave centered on `source`.
    pub fn recompute(&mut self, t: f64, source: Point) -> FieldResult<()> {
        self.recompute_with(t, source, false)
    }

    /// As [`RadialPulseGrid::recompute`], optionally spreading markers over the rayon pool.
    pub fn recompute_with(&mut self, t: f64, source: Point, parallel: bool) -> FieldResult<()> {
        let t = ensure_finite("t", t)?;
        ensure_finite("source.x", source.x)?;
        ensure_finite("source.y", source.y)?;

        let wave = self.wave;
        let update = |m: &mut PulseMarker| m.scale = wave.scale(m.position.distance(source), t);
        if parallel {
            self.markers.par_iter_mut().for_each(update);
        } else {
            self.markers.iter_mut().for_each(update);
        }
        self.source = source;
        Ok(())
    }

    /// Markers in row-major order.
    pub fn markers(&self) -> &[PulseMarker] {
        &self.markers
    }

    /// Marker at `(row, col)`.
    pub fn marker(&self, row: u32, col: u32) -> Option<&PulseMarker> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.markers
            .get(row as usize * self.cols as usize + col as usize)
    }

    /// Lattice size `(rows, cols)`.
    pub fn dims(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Source used by the last recompute.
    pub fn source(&self) -> Point {
        self.source
    }

    /// Wave constants.
    pub fn wave(&self) -> &PulseWave {
        &self.wave
    }

    pub(crate) fn emit(&self, out: &mut Vec<Primitive>) {
        out.reserve(self.markers.len() + 1);
        out.extend(self.markers.iter().map(|m| Primitive::Marker {
            position: Point3::new(m.position.x, m.position.y, 0.0),
            scale: m.scale,
            color: m.color,
        }));
        out.push(Primitive::Dot {
            position: Point3::new(self.source.x, self.source.y, 0.0),
            color: crate::scene::palette::SOURCE,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/pulse_grid.rs"]
mod tests;
