use std::iter::FusedIterator;

use crate::animation::segment::{ResolvedTrack, Segment};
use crate::animation::time::TimeValues;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FieldError, FieldResult};
use crate::scene::frame::{Frame, LayerFrame};
use crate::scene::layer::Layer;

/// Collects the clock, segments and layers of an animation before validation.
#[derive(Debug)]
pub struct DriverBuilder {
    fps: Fps,
    parallel: bool,
    time: TimeValues,
    segments: Vec<Segment>,
    layers: Vec<(String, Layer)>,
}

impl DriverBuilder {
    /// Spread per-element recompute work over the rayon pool. Output is identical either way.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Append a segment; segments run in the order they are added.
    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Register a layer. Layers recompute and emit in registration order.
    pub fn layer(mut self, name: impl Into<String>, layer: Layer) -> Self {
        self.layers.push((name.into(), layer));
        self
    }

    /// Validate everything and fix per-segment frame counts.
    #[tracing::instrument(skip(self), fields(segments = self.segments.len(), layers = self.layers.len()))]
    pub fn build(self) -> FieldResult<AnimationDriver> {
        if self.segments.is_empty() {
            return Err(FieldError::config("animation needs at least one segment"));
        }
        for (i, seg) in self.segments.iter().enumerate() {
            seg.validate(&self.time)
                .map_err(|e| FieldError::config(format!("segment {i}: {e}")))?;
        }
        for (idx, (name, layer)) in self.layers.iter().enumerate() {
            if self.layers[..idx].iter().any(|(n, _)| n == name) {
                return Err(FieldError::config(format!("duplicate layer name '{name}'")));
            }
            if layer.inputs().iter().any(|id| !self.time.contains(*id)) {
                return Err(FieldError::config(format!(
                    "layer '{name}' reads an undeclared time value"
                )));
            }
        }

        let segment_frames = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, s)| {
                self.fps
                    .frames_for_span(s.duration_secs)
                    .map_err(|e| FieldError::config(format!("segment {i}: {e}")))
            })
            .collect::<FieldResult<Vec<u64>>>()?;
        let total_frames = segment_frames
            .iter()
            .try_fold(0u64, |acc, n| acc.checked_add(*n))
            .ok_or_else(|| FieldError::config("animation too long: frame count overflows u64"))?;
        tracing::debug!(total_frames, "animation driver ready");

        Ok(AnimationDriver {
            fps: self.fps,
            parallel: self.parallel,
            time: self.time,
            segments: self.segments,
            segment_frames,
            layers: self.layers,
            cursor: Cursor::default(),
            emitted: 0,
            total_frames,
            failed: false,
        })
    }
}

#[derive(Debug, Default)]
struct Cursor {
    segment: usize,
    /// Frames already produced in the current segment; `0` means not yet entered.
    k: u64,
    n: u64,
    tracks: Vec<ResolvedTrack>,
}

/// Steps the clock through its segments and recomputes every layer once per frame.
///
/// The driver is a pull-based iterator over [`Frame`]s: each `next()` advances all values for one
/// tick, then recomputes layers in registration order, then assembles the frame. It is finite and
/// cannot be rewound; build a new driver to start over.
#[derive(Debug)]
pub struct AnimationDriver {
    fps: Fps,
    parallel: bool,
    time: TimeValues,
    segments: Vec<Segment>,
    /// Frame count of each segment, fixed at build time.
    segment_frames: Vec<u64>,
    layers: Vec<(String, Layer)>,
    cursor: Cursor,
    emitted: u64,
    total_frames: u64,
    failed: bool,
}

impl AnimationDriver {
    /// Start building a driver over `time` at `fps`.
    pub fn builder(fps: Fps, time: TimeValues) -> DriverBuilder {
        DriverBuilder {
            fps,
            parallel: false,
            time,
            segments: Vec::new(),
            layers: Vec::new(),
        }
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Frames the driver produces in total.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Frames produced so far.
    pub fn frames_emitted(&self) -> u64 {
        self.emitted
    }

    /// Frames still to come; zero after a failure.
    pub fn remaining_frames(&self) -> u64 {
        if self.failed {
            0
        } else {
            self.total_frames - self.emitted
        }
    }

    /// Current values.
    pub fn time(&self) -> &TimeValues {
        &self.time
    }

    /// Segments in run order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Layer names in registration order.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.layers.iter().map(|(n, _)| n.as_str())
    }

    /// Layer registered as `name`.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|(n, _)| n == name).map(|(_, l)| l)
    }

    /// Move the clock forward by one frame. Returns `false` once every segment is exhausted.
    fn advance(&mut self) -> bool {
        loop {
            let (Some(seg), Some(&n)) = (
                self.segments.get(self.cursor.segment),
                self.segment_frames.get(self.cursor.segment),
            ) else {
                return false;
            };
            if self.cursor.k == 0 {
                self.cursor.n = n;
                self.cursor.tracks = seg.resolve(&self.time);
                tracing::debug!(
                    segment = self.cursor.segment,
                    frames = self.cursor.n,
                    hold = seg.is_hold(),
                    "entering segment"
                );
            }
            if self.cursor.k < self.cursor.n {
                self.cursor.k += 1;
                for tr in &self.cursor.tracks {
                    self.time
                        .set(tr.value, tr.sample(seg.ease, self.cursor.k, self.cursor.n));
                }
                return true;
            }
            self.cursor.segment += 1;
            self.cursor.k = 0;
        }
    }

    fn produce(&mut self) -> FieldResult<Frame> {
        for (name, layer) in &mut self.layers {
            layer
                .recompute(&self.time, self.parallel)
                .map_err(|e| match e {
                    FieldError::NumericDomain(msg) => {
                        FieldError::numeric_domain(format!("layer '{name}': {msg}"))
                    }
                    other => other,
                })?;
        }

        let layers = self
            .layers
            .iter()
            .map(|(name, layer)| {
                let mut primitives = Vec::new();
                layer.emit(&mut primitives);
                LayerFrame {
                    name: name.clone(),
                    primitives,
                }
            })
            .collect();

        let index = FrameIndex(self.emitted);
        Ok(Frame {
            index,
            pts_secs: self.fps.frames_to_secs(index.0),
            segment: self.cursor.segment,
            values: self
                .time
                .iter()
                .map(|(n, v)| (n.to_owned(), v))
                .collect(),
            layers,
        })
    }
}

impl Iterator for AnimationDriver {
    type Item = FieldResult<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.advance() {
            return None;
        }
        let frame = self.produce();
        match frame {
            Ok(_) => self.emitted += 1,
            Err(ref e) => {
                tracing::warn!(error = %e, frame = self.emitted, "frame recompute failed");
                self.failed = true;
            }
        }
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining_frames()).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl FusedIterator for AnimationDriver {}

#[cfg(test)]
#[path = "../../tests/unit/scene/driver.rs"]
mod tests;
