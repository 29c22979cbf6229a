use rayon::prelude::*;

use crate::assets::sample::ImageSample;
use crate::field::height::HeightField;
use crate::foundation::core::{Point3, Rect, Rgb8};
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::ensure_finite;
use crate::layers::validate_domain;
use crate::scene::frame::Primitive;

/// One tile of a [`TiledSurfaceMesh`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridCell {
    /// Domain center along `u`.
    pub u: f64,
    /// Domain center along `v`.
    pub v: f64,
    /// Sampled once from the source image.
    pub color: Rgb8,
    /// Elevation at the last recompute.
    pub z: f64,
}

/// Fixed `nx x ny` grid of image-colored tiles whose elevations follow a [`HeightField`].
///
/// Cells live in one flat row-major array (`j` outer, `i` inner) and are updated in place by
/// index; the cell count never changes after construction.
#[derive(Clone, Debug)]
pub struct TiledSurfaceMesh {
    field: HeightField,
    domain: Rect,
    nx: u32,
    ny: u32,
    du: f64,
    dv: f64,
    cells: Vec<GridCell>,
}

impl TiledSurfaceMesh {
    /// Partition `domain` (u along x, v along y) into `nx x ny` cells and color each one from the
    /// nearest pixel of `image`. Elevations start at `t = 0`.
    #[tracing::instrument(skip(image, field), fields(image_w = image.width(), image_h = image.height()))]
    pub fn new(
        domain: Rect,
        nx: u32,
        ny: u32,
        image: &ImageSample,
        field: HeightField,
    ) -> FieldResult<Self> {
        if nx == 0 || ny == 0 {
            return Err(FieldError::config(format!(
                "tiled surface dimensions must be > 0, got {nx}x{ny}"
            )));
        }
        validate_domain(domain)?;
        field.validate()?;

        let du = domain.width() / f64::from(nx);
        let dv = domain.height() / f64::from(ny);
        let mut cells = Vec::with_capacity(nx as usize * ny as usize);
        for j in 0..ny {
            for i in 0..nx {
                let u = domain.x0 + (f64::from(i) + 0.5) * du;
                let v = domain.y0 + (f64::from(j) + 0.5) * dv;
                cells.push(GridCell {
                    u,
                    v,
                    color: image.sample_cell(i, j, nx, ny),
                    z: field.height(u, v, 0.0),
                });
            }
        }
        tracing::debug!(cells = cells.len(), "built tiled surface");

        Ok(Self {
            field,
            domain,
            nx,
            ny,
            du,
            dv,
            cells,
        })
    }

    /// Set every cell's elevation to `field(u, v, t)`.
    pub fn recompute(&mut self, t: f64) -> FieldResult<()> {
        self.recompute_with(t, false)
    }

    /// As [`TiledSurfaceMesh::recompute`], optionally spreading cells over the rayon pool.
    /// Both paths produce identical elevations.
    pub fn recompute_with(&mut self, t: f64, parallel: bool) -> FieldResult<()> {
        let t = ensure_finite("t", t)?;
        let field = self.field;
        if parallel {
            self.cells
                .par_iter_mut()
                .for_each(|c| c.z = field.height(c.u, c.v, t));
        } else {
            for c in &mut self.cells {
                c.z = field.height(c.u, c.v, t);
            }
        }
        Ok(())
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cell at column `i`, row `j`.
    pub fn cell(&self, i: u32, j: u32) -> Option<&GridCell> {
        if i >= self.nx || j >= self.ny {
            return None;
        }
        self.cells.get(j as usize * self.nx as usize + i as usize)
    }

    /// Grid size `(nx, ny)`.
    pub fn dims(&self) -> (u32, u32) {
        (self.nx, self.ny)
    }

    /// Cell extent `(du, dv)` in domain units.
    pub fn cell_size(&self) -> (f64, f64) {
        (self.du, self.dv)
    }

    /// Domain the grid covers.
    pub fn domain(&self) -> Rect {
        self.domain
    }

    /// Field driving elevations.
    pub fn field(&self) -> &HeightField {
        &self.field
    }

    pub(crate) fn emit(&self, out: &mut Vec<Primitive>) {
        out.reserve(self.cells.len());
        out.extend(self.cells.iter().map(|c| Primitive::Tile {
            center: Point3::new(c.u, c.v, c.z),
            size: [self.du, self.dv],
            color: c.color,
        }));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/tiled.rs"]
mod tests;
