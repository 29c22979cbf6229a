use rayon::prelude::*;

use crate::field::height::HeightField;
use crate::foundation::core::{Point3, Rect, Rgb8};
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::ensure_finite;
use crate::layers::validate_domain;
use crate::scene::frame::Primitive;

/// One quad of a tessellated surface. Corners run counter-clockwise from `(u0, v0)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SurfacePatch {
    /// Column index.
    pub i: u32,
    /// Row index.
    pub j: u32,
    /// Corners lifted onto the surface.
    pub corners: [Point3; 4],
    /// Checkerboard color.
    pub color: Rgb8,
}

/// Height-field surface rebuilt from scratch every frame at a fixed resolution, colored as a
/// checkerboard. Nothing carries over between frames except the configuration.
#[derive(Clone, Debug)]
pub struct ContinuousSurfaceMesh {
    field: HeightField,
    domain: Rect,
    res_u: u32,
    res_v: u32,
    colors: [Rgb8; 2],
    patches: Vec<SurfacePatch>,
}

impl ContinuousSurfaceMesh {
    /// Surface over `domain` with `res_u x res_v` patches. Nothing is tessellated until the first rebuild.
    pub fn new(
        domain: Rect,
        res_u: u32,
        res_v: u32,
        colors: [Rgb8; 2],
        field: HeightField,
    ) -> FieldResult<Self> {
        if res_u == 0 || res_v == 0 {
            return Err(FieldError::config(format!(
                "surface resolution must be > 0, got {res_u}x{res_v}"
            )));
        }
        validate_domain(domain)?;
        field.validate()?;
        Ok(Self {
            field,
            domain,
            res_u,
            res_v,
            colors,
            patches: Vec::new(),
        })
    }

    /// Build a fresh patch set for time `t` without touching the current one.
    pub fn tessellate(&self, t: f64, parallel: bool) -> FieldResult<Vec<SurfacePatch>> {
        let t = ensure_finite("t", t)?;
        let (cols, rows) = (self.res_u as usize + 1, self.res_v as usize + 1);

        let vertex = |idx: usize| {
            let (a, b) = (idx % cols, idx / cols);
            let u = self.domain.x0 + self.domain.width() * a as f64 / f64::from(self.res_u);
            let v = self.domain.y0 + self.domain.height() * b as f64 / f64::from(self.res_v);
            Point3::new(u, v, self.field.height(u, v, t))
        };
        let verts: Vec<Point3> = if parallel {
            (0..cols * rows).into_par_iter().map(vertex).collect()
        } else {
            (0..cols * rows).map(vertex).collect()
        };

        let mut patches = Vec::with_capacity(self.res_u as usize * self.res_v as usize);
        for j in 0..self.res_v as usize {
            for i in 0..self.res_u as usize {
                let at = |a: usize, b: usize| verts[b * cols + a];
                patches.push(SurfacePatch {
                    i: i as u32,
                    j: j as u32,
                    corners: [at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1)],
                    color: self.colors[(i + j) % 2],
                });
            }
        }
        Ok(patches)
    }

    /// Discard the current patches and replace them with a tessellation at `t`.
    pub fn rebuild(&mut self, t: f64) -> FieldResult<()> {
        self.rebuild_with(t, false)
    }

    /// As [`ContinuousSurfaceMesh::rebuild`], optionally evaluating vertices on the rayon pool.
    pub fn rebuild_with(&mut self, t: f64, parallel: bool) -> FieldResult<()> {
        self.patches = self.tessellate(t, parallel)?;
        Ok(())
    }

    /// Patches from the last rebuild, row-major.
    pub fn patches(&self) -> &[SurfacePatch] {
        &self.patches
    }

    /// Patch counts `(res_u, res_v)`.
    pub fn resolution(&self) -> (u32, u32) {
        (self.res_u, self.res_v)
    }

    pub(crate) fn emit(&self, out: &mut Vec<Primitive>) {
        out.reserve(self.patches.len());
        out.extend(self.patches.iter().map(|p| Primitive::Patch {
            corners: p.corners,
            color: p.color,
        }));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/continuous.rs"]
mod tests;
