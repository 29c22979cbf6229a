use crate::animation::ease::Ease;
use crate::animation::time::{TimeValues, ValueId};
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::{ensure_finite, ensure_positive};

/// Where a track ends.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum TrackTarget {
    /// Land on this value.
    Absolute(f64),
    /// Land on the segment's start value plus this delta.
    Relative(f64),
}

/// One value animated by a [`Segment`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Track {
    /// Value being animated.
    pub value: ValueId,
    /// Explicit start; `None` continues from whatever the value holds when the segment begins.
    pub start: Option<f64>,
    /// Where the value ends.
    pub target: TrackTarget,
}

/// A span of animation time: every track runs together over `duration_secs` using one easing.
///
/// A segment without tracks is a hold: frames are still produced, values stay put.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    /// Length in seconds; must be positive and finite.
    pub duration_secs: f64,
    /// Easing applied to every track.
    pub ease: Ease,
    /// Tracks run together; empty for a hold.
    pub tracks: Vec<Track>,
}

impl Segment {
    /// Empty segment of `duration_secs` using `ease`; add tracks with the builder methods.
    pub fn new(duration_secs: f64, ease: Ease) -> Self {
        Self {
            duration_secs,
            ease,
            tracks: Vec::new(),
        }
    }

    /// Segment that only emits frames, leaving every value unchanged.
    pub fn hold(duration_secs: f64) -> Self {
        Self::new(duration_secs, Ease::Linear)
    }

    /// Animate `value` from its current state to `target`.
    pub fn to(mut self, value: ValueId, target: f64) -> Self {
        self.tracks.push(Track {
            value,
            start: None,
            target: TrackTarget::Absolute(target),
        });
        self
    }

    /// Animate `value` from `start` to `target`.
    pub fn from_to(mut self, value: ValueId, start: f64, target: f64) -> Self {
        self.tracks.push(Track {
            value,
            start: Some(start),
            target: TrackTarget::Absolute(target),
        });
        self
    }

    /// Animate `value` by `delta` relative to its state at segment start.
    pub fn by(mut self, value: ValueId, delta: f64) -> Self {
        self.tracks.push(Track {
            value,
            start: None,
            target: TrackTarget::Relative(delta),
        });
        self
    }

    /// True when the segment animates nothing.
    pub fn is_hold(&self) -> bool {
        self.tracks.is_empty()
    }

    pub(crate) fn validate(&self, time: &TimeValues) -> FieldResult<()> {
        ensure_positive("segment duration", self.duration_secs)?;
        for (i, tr) in self.tracks.iter().enumerate() {
            if !time.contains(tr.value) {
                return Err(FieldError::config(format!(
                    "segment track {i} references an undeclared time value"
                )));
            }
            if self.tracks[..i].iter().any(|o| o.value == tr.value) {
                let name = time.name(tr.value).unwrap_or("?");
                return Err(FieldError::config(format!(
                    "time value '{name}' is animated twice in one segment"
                )));
            }
            if let Some(s) = tr.start {
                ensure_finite("track start", s).map_err(as_config)?;
            }
            match tr.target {
                TrackTarget::Absolute(v) | TrackTarget::Relative(v) => {
                    ensure_finite("track target", v).map_err(as_config)?;
                }
            }
        }
        Ok(())
    }

    /// Pin every track to concrete endpoints using the values current at segment start.
    pub(crate) fn resolve(&self, time: &TimeValues) -> Vec<ResolvedTrack> {
        self.tracks
            .iter()
            .map(|tr| {
                let start = tr.start.unwrap_or_else(|| time.get(tr.value));
                let target = match tr.target {
                    TrackTarget::Absolute(v) => v,
                    TrackTarget::Relative(d) => start + d,
                };
                ResolvedTrack {
                    value: tr.value,
                    start,
                    target,
                }
            })
            .collect()
    }
}

fn as_config(e: FieldError) -> FieldError {
    FieldError::config(e.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResolvedTrack {
    pub(crate) value: ValueId,
    pub(crate) start: f64,
    pub(crate) target: f64,
}

impl ResolvedTrack {
    /// Value at frame `k` of `n` (1-based). The last frame is exactly `target`.
    pub(crate) fn sample(&self, ease: Ease, k: u64, n: u64) -> f64 {
        if k >= n {
            return self.target;
        }
        let p = k as f64 / n as f64;
        self.start + ease.apply(p) * (self.target - self.start)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/segment.rs"]
mod tests;
