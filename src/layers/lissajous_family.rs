use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::field::lissajous::{LissajousCurve, LissajousParams};
use crate::foundation::core::{Point3, Rgb8};
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::{ensure_finite, gradient_at, spread};
use crate::layers::trail::{Trail, TrailCapacity};
use crate::scene::frame::{PathRole, Primitive};

/// Fewest points a background curve may be sampled with.
pub const MIN_CURVE_SAMPLES: usize = 100;

/// Shape, size and colors of a [`LissajousFamily`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LissajousFamilyConfig {
    /// Shape shared by every curve.
    pub params: LissajousParams,
    /// Number of curves; curve `i` is offset by `i * 2pi / count`.
    pub count: usize,
    /// Points per curve per frame, at least [`MIN_CURVE_SAMPLES`].
    pub samples: usize,
    /// Index of the curve followed by the trace marker.
    pub traced: usize,
    /// Capacity of the trace marker's trail.
    pub trail: TrailCapacity,
    /// Gradient stops spread over the curves, one solid color per curve.
    pub curve_colors: Vec<Rgb8>,
    /// Gradient stops along the trail, oldest point first.
    pub trail_colors: Vec<Rgb8>,
}

impl Default for LissajousFamilyConfig {
    fn default() -> Self {
        Self {
            params: LissajousParams::REFERENCE,
            count: 18,
            samples: 200,
            traced: 0,
            trail: TrailCapacity::default(),
            curve_colors: crate::scene::palette::CURVE_GRADIENT.to_vec(),
            trail_colors: crate::scene::palette::TRAIL_GRADIENT.to_vec(),
        }
    }
}

/// Marker riding one curve of the family, leaving a trail of one point per update.
#[derive(Clone, Debug)]
pub struct TraceMarker {
    curve: LissajousCurve,
    position: Point3,
    trail: Trail,
}

impl TraceMarker {
    /// Marker at the start of `curve` with an empty trail.
    pub fn new(curve: LissajousCurve, capacity: TrailCapacity) -> Self {
        Self {
            curve,
            position: curve.point(0.0, 0.0),
            trail: Trail::new(capacity),
        }
    }

    /// Position at `t mod 2pi` with the shared `phase`, without touching the trail.
    pub fn position_at(&self, t: f64, phase: f64) -> Point3 {
        self.curve.point(t.rem_euclid(TAU), phase)
    }

    /// Move to the position for `(t, phase)` and append it to the trail.
    pub fn update(&mut self, t: f64, phase: f64) -> FieldResult<Point3> {
        let t = ensure_finite("t", t)?;
        let phase = ensure_finite("phase", phase)?;
        self.position = self.position_at(t, phase);
        self.trail.push(self.position);
        Ok(self.position)
    }

    /// Position after the last update.
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Positions left behind, oldest first.
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Curve being traced.
    pub fn curve(&self) -> &LissajousCurve {
        &self.curve
    }
}

/// A rotating family of Lissajous curves plus a trace marker on one of them.
///
/// Every recompute re-samples every curve from scratch at the current shared phase.
#[derive(Clone, Debug)]
pub struct LissajousFamily {
    curves: Vec<LissajousCurve>,
    colors: Vec<Rgb8>,
    trail_colors: Vec<Rgb8>,
    samples: usize,
    paths: Vec<Vec<Point3>>,
    tracer: TraceMarker,
}

impl LissajousFamily {
    /// Build the family and sample every curve at phase `0`.
    pub fn new(cfg: &LissajousFamilyConfig) -> FieldResult<Self> {
        cfg.params.validate()?;
        if cfg.count == 0 {
            return Err(FieldError::config("lissajous family needs at least one curve"));
        }
        if cfg.samples < MIN_CURVE_SAMPLES {
            return Err(FieldError::config(format!(
                "lissajous curves need at least {MIN_CURVE_SAMPLES} samples, got {}",
                cfg.samples
            )));
        }
        if cfg.traced >= cfg.count {
            return Err(FieldError::config(format!(
                "traced curve {} is outside a family of {}",
                cfg.traced, cfg.count
            )));
        }

        let step = TAU / cfg.count as f64;
        let curves: Vec<_> = (0..cfg.count)
            .map(|i| LissajousCurve::new(cfg.params, i as f64 * step))
            .collect();
        let colors = (0..cfg.count)
            .map(|i| gradient_at(&cfg.curve_colors, spread(i, cfg.count)))
            .collect();
        let tracer = TraceMarker::new(curves[cfg.traced], cfg.trail);

        let mut family = Self {
            paths: vec![Vec::with_capacity(cfg.samples); curves.len()],
            curves,
            colors,
            trail_colors: cfg.trail_colors.clone(),
            samples: cfg.samples,
            tracer,
        };
        family.resample(0.0, false);
        Ok(family)
    }

    /// Re-sample every curve at `phase` and advance the trace marker to `(t, phase)`.
    pub fn recompute(&mut self, t: f64, phase: f64) -> FieldResult<()> {
        self.recompute_with(t, phase, false)
    }

    /// As [`LissajousFamily::recompute`], optionally re-sampling curves on the rayon pool.
    pub fn recompute_with(&mut self, t: f64, phase: f64, parallel: bool) -> FieldResult<()> {
        let t = ensure_finite("t", t)?;
        let phase = ensure_finite("phase", phase)?;
        self.resample(phase, parallel);
        self.tracer.update(t, phase)?;
        Ok(())
    }

    fn resample(&mut self, phase: f64, parallel: bool) {
        let samples = self.samples;
        if parallel {
            self.paths
                .par_iter_mut()
                .zip(self.curves.par_iter())
                .for_each(|(out, c)| c.sample_into(phase, samples, out));
        } else {
            for (out, c) in self.paths.iter_mut().zip(&self.curves) {
                c.sample_into(phase, samples, out);
            }
        }
    }

    /// Curves in offset order.
    pub fn curves(&self) -> &[LissajousCurve] {
        &self.curves
    }

    /// Stroke color of curve `i`.
    pub fn curve_color(&self, i: usize) -> Option<Rgb8> {
        self.colors.get(i).copied()
    }

    /// Current samples of curve `i`.
    pub fn path(&self, i: usize) -> Option<&[Point3]> {
        self.paths.get(i).map(Vec::as_slice)
    }

    /// Marker riding the traced curve.
    pub fn tracer(&self) -> &TraceMarker {
        &self.tracer
    }

    pub(crate) fn emit(&self, out: &mut Vec<Primitive>) {
        out.reserve(self.paths.len() + 2);
        out.extend(
            self.paths
                .iter()
                .zip(&self.colors)
                .map(|(pts, color)| Primitive::Polyline {
                    points: pts.clone(),
                    closed: true,
                    role: PathRole::Curve,
                    colors: vec![*color],
                }),
        );
        out.push(Primitive::Polyline {
            points: self.tracer.trail().to_vec(),
            closed: false,
            role: PathRole::Trail,
            colors: self.trail_colors.clone(),
        });
        out.push(Primitive::Dot {
            position: self.tracer.position(),
            color: crate::scene::palette::TRACER,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/lissajous_family.rs"]
mod tests;
