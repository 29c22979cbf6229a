use std::collections::BTreeMap;

use crate::foundation::core::{FrameIndex, Point3, Rgb8};

/// What a polyline depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathRole {
    /// A re-sampled background curve.
    Curve,
    /// The accumulated path of a moving marker.
    Trail,
}

/// Positioned, colored primitive handed to the compositor.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Axis-aligned square tile lifted to elevation `center.z`.
    Tile {
        /// Center, elevation included.
        center: Point3,
        /// Extent `[du, dv]`.
        size: [f64; 2],
        /// Fill color.
        color: Rgb8,
    },
    /// Surface quad.
    Patch {
        /// Corners, counter-clockwise.
        corners: [Point3; 4],
        /// Fill color.
        color: Rgb8,
    },
    /// Lattice marker drawn at `scale` (diameter).
    Marker {
        /// Lattice position.
        position: Point3,
        /// Diameter.
        scale: f64,
        /// Fill color.
        color: Rgb8,
    },
    /// Open or closed path through `points`.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<Point3>,
        /// Whether the last point connects back to the first.
        closed: bool,
        /// What the path depicts.
        role: PathRole,
        /// Stroke gradient stops spread evenly from the first point to the last. A single stop is
        /// a solid stroke.
        colors: Vec<Rgb8>,
    },
    /// Point marker (source points, tracers).
    Dot {
        /// Where the dot sits.
        position: Point3,
        /// Fill color.
        color: Rgb8,
    },
}

/// Primitives produced by one registered layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerFrame {
    /// Registered layer name.
    pub name: String,
    /// Primitives in draw order.
    pub primitives: Vec<Primitive>,
}

/// One frame description: driver state plus every layer's primitives in registration order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    /// Zero-based frame number.
    pub index: FrameIndex,
    /// Presentation time of this frame.
    pub pts_secs: f64,
    /// Index of the segment that produced it.
    pub segment: usize,
    /// Every driver value after this tick.
    pub values: BTreeMap<String, f64>,
    /// Layers in registration order.
    pub layers: Vec<LayerFrame>,
}

impl Frame {
    /// Primitives of the layer registered as `name`.
    pub fn layer(&self, name: &str) -> Option<&LayerFrame> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Driver value `name` at this frame.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Primitives across every layer.
    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(|l| l.primitives.len()).sum()
    }
}
