use std::f64::consts::{PI, TAU};
use std::str::FromStr;

use crate::animation::ease::Ease;
use crate::animation::segment::Segment;
use crate::animation::time::TimeValues;
use crate::assets::sample::ImageSample;
use crate::field::height::HeightField;
use crate::foundation::core::Fps;
use crate::foundation::error::{FieldError, FieldResult};
use crate::layers::continuous::ContinuousSurfaceMesh;
use crate::layers::lissajous_family::{LissajousFamily, LissajousFamilyConfig};
use crate::layers::pulse_grid::{PulseGridConfig, RadialPulseGrid};
use crate::layers::square_domain;
use crate::layers::tiled::TiledSurfaceMesh;
use crate::layers::trail::TrailCapacity;
use crate::scene::driver::AnimationDriver;
use crate::scene::layer::Layer;
use crate::scene::palette;

/// Built-in scenes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Rotating family of 18 Lissajous curves with a traced marker.
    LissajousFlow,
    /// 22 x 12 marker lattice pulsing around a drifting source.
    PulseGrid,
    /// Checkerboard height-field surface rebuilt every frame.
    SurfaceWave,
    /// 64 x 64 image-colored tiles riding the same height field.
    TiledSurface,
}

impl Preset {
    /// Every preset, in listing order.
    pub const ALL: [Preset; 4] = [
        Self::LissajousFlow,
        Self::PulseGrid,
        Self::SurfaceWave,
        Self::TiledSurface,
    ];

    /// Kebab-case name used by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::LissajousFlow => "lissajous-flow",
            Self::PulseGrid => "pulse-grid",
            Self::SurfaceWave => "surface-wave",
            Self::TiledSurface => "tiled-surface",
        }
    }

    /// Whether a source image is required.
    pub fn needs_image(self) -> bool {
        matches!(self, Self::TiledSurface)
    }
}

impl FromStr for Preset {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| FieldError::config(format!("unknown preset '{s}'")))
    }
}

/// Knobs shared by every preset.
#[derive(Clone, Debug, Default)]
pub struct PresetOpts {
    /// 60 fps instead of 30.
    pub high_quality: bool,
    /// Spread per-element work over the rayon pool.
    pub parallel: bool,
    /// Trail capacity of traced markers.
    pub trail: TrailCapacity,
    /// Source image for [`Preset::TiledSurface`].
    pub image: Option<ImageSample>,
}

impl PresetOpts {
    /// 30 fps, or 60 in high quality.
    pub fn fps(&self) -> Fps {
        Fps {
            num: if self.high_quality { 60 } else { 30 },
            den: 1,
        }
    }
}

/// Build a ready-to-run driver for `preset`.
#[tracing::instrument(skip(opts), fields(hq = opts.high_quality, parallel = opts.parallel))]
pub fn build_preset(preset: Preset, opts: &PresetOpts) -> FieldResult<AnimationDriver> {
    match preset {
        Preset::LissajousFlow => lissajous_flow(opts),
        Preset::PulseGrid => pulse_grid(opts),
        Preset::SurfaceWave => surface_wave(opts),
        Preset::TiledSurface => {
            let image = opts.image.as_ref().ok_or_else(|| {
                FieldError::resource_load("tiled-surface needs a source image")
            })?;
            tiled_surface(image, opts)
        }
    }
}

/// Rotating family of Lissajous curves with a traced marker.
pub fn lissajous_flow(opts: &PresetOpts) -> FieldResult<AnimationDriver> {
    let mut time = TimeValues::new();
    let t = time.declare("t", 0.0)?;
    let phase = time.declare("phase", 0.0)?;
    let family = LissajousFamily::new(&LissajousFamilyConfig {
        trail: opts.trail,
        ..LissajousFamilyConfig::default()
    })?;

    AnimationDriver::builder(opts.fps(), time)
        .parallel(opts.parallel)
        .segment(
            Segment::new(10.0, Ease::InOutSine)
                .to(t, 10.0 * TAU)
                .to(phase, 8.0 * PI),
        )
        .segment(
            Segment::new(12.0, Ease::Linear)
                .to(t, 20.0 * TAU)
                .to(phase, 20.0 * PI),
        )
        .segment(Segment::hold(0.5))
        .layer("curves", Layer::Lissajous { family, t, phase })
        .build()
}

/// Marker lattice pulsing around a drifting source.
pub fn pulse_grid(opts: &PresetOpts) -> FieldResult<AnimationDriver> {
    let mut time = TimeValues::new();
    let t = time.declare("t", 0.0)?;
    let source_x = time.declare("source.x", -5.0)?;
    let source_y = time.declare("source.y", -2.5)?;
    let grid = RadialPulseGrid::new(&PulseGridConfig::default())?;

    AnimationDriver::builder(opts.fps(), time)
        .parallel(opts.parallel)
        .segment(Segment::new(5.0, Ease::Linear).to(t, 10.0))
        .segment(
            Segment::new(7.0, Ease::InOutSine)
                .to(t, 28.0)
                .by(source_x, 8.0)
                .by(source_y, 3.0),
        )
        .segment(Segment::hold(0.6))
        .layer(
            "grid",
            Layer::PulseGrid {
                grid,
                t,
                source_x,
                source_y,
            },
        )
        .build()
}

/// Checkerboard height-field surface.
pub fn surface_wave(opts: &PresetOpts) -> FieldResult<AnimationDriver> {
    let mut time = TimeValues::new();
    let t = time.declare("t", 0.0)?;
    let mesh = ContinuousSurfaceMesh::new(
        square_domain(3.0),
        32,
        32,
        palette::CHECKERBOARD,
        HeightField::REFERENCE,
    )?;

    AnimationDriver::builder(opts.fps(), time)
        .parallel(opts.parallel)
        .segment(Segment::new(6.0, Ease::Linear).to(t, 12.0))
        .segment(Segment::new(10.0, Ease::Linear).to(t, 36.0))
        .segment(Segment::hold(0.6))
        .layer("surface", Layer::ContinuousSurface { mesh, t })
        .build()
}

/// Image-colored tiles over the height field.
pub fn tiled_surface(image: &ImageSample, opts: &PresetOpts) -> FieldResult<AnimationDriver> {
    let mut time = TimeValues::new();
    let t = time.declare("t", 0.0)?;
    let mesh = TiledSurfaceMesh::new(square_domain(3.0), 64, 64, image, HeightField::REFERENCE)?;

    AnimationDriver::builder(opts.fps(), time)
        .parallel(opts.parallel)
        .segment(Segment::new(10.0, Ease::Linear).to(t, 36.0))
        .segment(Segment::hold(1.0))
        .layer("tiles", Layer::TiledSurface { mesh, t })
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
