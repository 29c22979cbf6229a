//! Procedural animation fields for Wavyte.
//!
//! This crate computes, frame by frame, the geometry and color of a handful of procedurally
//! animated layers, all deterministic functions of a small set of advancing scalars:
//!
//! - [`TiledSurfaceMesh`]: image-colored tiles riding a [`HeightField`]
//! - [`ContinuousSurfaceMesh`]: a checkerboard surface re-tessellated every frame
//! - [`RadialPulseGrid`]: a marker lattice pulsing around a moving source
//! - [`LissajousFamily`]: rotating Lissajous curves plus a [`TraceMarker`] with a trail
//!
//! An [`AnimationDriver`] advances the clock through eased [`Segment`]s and recomputes every
//! registered [`Layer`] once per frame. It is an iterator of [`Frame`] descriptions, which can be
//! streamed into a [`FrameSink`] with [`drive_into`]. Nothing here rasterizes or encodes media.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod encode;
mod field;
mod foundation;
mod layers;
mod scene;

pub use animation::ease::Ease;
pub use animation::segment::{Segment, Track, TrackTarget};
pub use animation::time::{TimeValues, ValueId};
pub use assets::decode::{decode_image, load_image};
pub use assets::sample::ImageSample;
pub use encode::sink::{
    CancelToken, CountingSink, DriveStats, FrameSink, InMemorySink, JsonLinesSink, SinkConfig,
    drive_into,
};
pub use field::height::{HeightField, surface_height};
pub use field::lissajous::{LissajousCurve, LissajousParams, lissajous_point};
pub use field::pulse::PulseWave;
pub use foundation::core::{Fps, FrameIndex, Point, Point3, Rect, Rgb8, Vec2};
pub use foundation::error::{FieldError, FieldResult};
pub use layers::continuous::{ContinuousSurfaceMesh, SurfacePatch};
pub use layers::lissajous_family::{
    LissajousFamily, LissajousFamilyConfig, MIN_CURVE_SAMPLES, TraceMarker,
};
pub use layers::pulse_grid::{PulseGridConfig, PulseMarker, RadialPulseGrid};
pub use layers::square_domain;
pub use layers::tiled::{GridCell, TiledSurfaceMesh};
pub use layers::trail::{Trail, TrailCapacity};
pub use scene::driver::{AnimationDriver, DriverBuilder};
pub use scene::frame::{Frame, LayerFrame, PathRole, Primitive};
pub use scene::layer::Layer;
pub use scene::palette;
pub use scene::presets::{
    Preset, PresetOpts, build_preset, lissajous_flow, pulse_grid, surface_wave, tiled_surface,
};
