use crate::animation::time::{TimeValues, ValueId};
use crate::foundation::core::Point;
use crate::foundation::error::FieldResult;
use crate::layers::continuous::ContinuousSurfaceMesh;
use crate::layers::lissajous_family::LissajousFamily;
use crate::layers::pulse_grid::RadialPulseGrid;
use crate::layers::tiled::TiledSurfaceMesh;
use crate::scene::frame::Primitive;

/// A structural component bound to the driver values it reads each frame.
///
/// The driver hands every layer the full [`TimeValues`] snapshot; the layer picks out its own
/// inputs and passes them to the component as explicit arguments.
#[derive(Clone, Debug)]
pub enum Layer {
    /// Image-colored tiles.
    TiledSurface {
        /// Mesh to update.
        mesh: TiledSurfaceMesh,
        /// Time input.
        t: ValueId,
    },
    /// Surface rebuilt every frame.
    ContinuousSurface {
        /// Mesh to rebuild.
        mesh: ContinuousSurfaceMesh,
        /// Time input.
        t: ValueId,
    },
    /// Marker lattice around a moving source.
    PulseGrid {
        /// Grid to rescale.
        grid: RadialPulseGrid,
        /// Time input.
        t: ValueId,
        /// Source x input.
        source_x: ValueId,
        /// Source y input.
        source_y: ValueId,
    },
    /// Curve family with a trace marker.
    Lissajous {
        /// Family to re-sample.
        family: LissajousFamily,
        /// Time input; also drives the marker.
        t: ValueId,
        /// Shared phase input.
        phase: ValueId,
    },
}

impl Layer {
    /// Short kind name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TiledSurface { .. } => "tiled_surface",
            Self::ContinuousSurface { .. } => "continuous_surface",
            Self::PulseGrid { .. } => "pulse_grid",
            Self::Lissajous { .. } => "lissajous",
        }
    }

    pub(crate) fn inputs(&self) -> Vec<ValueId> {
        match self {
            Self::TiledSurface { t, .. } | Self::ContinuousSurface { t, .. } => vec![*t],
            Self::PulseGrid {
                t,
                source_x,
                source_y,
                ..
            } => vec![*t, *source_x, *source_y],
            Self::Lissajous { t, phase, .. } => vec![*t, *phase],
        }
    }

    pub(crate) fn recompute(&mut self, time: &TimeValues, parallel: bool) -> FieldResult<()> {
        match self {
            Self::TiledSurface { mesh, t } => mesh.recompute_with(time.get(*t), parallel),
            Self::ContinuousSurface { mesh, t } => mesh.rebuild_with(time.get(*t), parallel),
            Self::PulseGrid {
                grid,
                t,
                source_x,
                source_y,
            } => {
                let source = Point::new(time.get(*source_x), time.get(*source_y));
                grid.recompute_with(time.get(*t), source, parallel)
            }
            Self::Lissajous { family, t, phase } => {
                family.recompute_with(time.get(*t), time.get(*phase), parallel)
            }
        }
    }

    pub(crate) fn emit(&self, out: &mut Vec<Primitive>) {
        match self {
            Self::TiledSurface { mesh, .. } => mesh.emit(out),
            Self::ContinuousSurface { mesh, .. } => mesh.emit(out),
            Self::PulseGrid { grid, .. } => grid.emit(out),
            Self::Lissajous { family, .. } => family.emit(out),
        }
    }
}
