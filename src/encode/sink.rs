use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::foundation::core::Fps;
use crate::foundation::error::{FieldError, FieldResult};
use crate::scene::driver::AnimationDriver;
use crate::scene::frame::Frame;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    /// Frame rate of the driver.
    pub fps: Fps,
    /// Frames the driver will produce if not stopped early.
    pub total_frames: u64,
    /// Layer names in emission order.
    pub layers: Vec<String>,
}

/// Consumer of frame descriptions, typically a compositor or recorder.
///
/// Ordering contract: `push_frame` is called in strictly increasing frame order.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FieldResult<()>;
    /// Push one frame in timeline order.
    fn push_frame(&mut self, frame: &Frame) -> FieldResult<()>;
    /// Called once after the last frame is pushed, and also when a run fails after `begin`.
    fn end(&mut self) -> FieldResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<Frame>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames pushed since the last `begin`, in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FieldResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame) -> FieldResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> FieldResult<()> {
        Ok(())
    }
}

/// Writes the sink config and then one JSON document per frame, newline separated.
pub struct JsonLinesSink<W: Write> {
    out: W,
    written: u64,
}

impl<W: Write> JsonLinesSink<W> {
    /// Sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Frames written so far, excluding the config line.
    pub fn frames_written(&self) -> u64 {
        self.written
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> FieldResult<()> {
        serde_json::to_writer(&mut self.out, value)
            .map_err(|e| FieldError::serde(format!("encode frame JSON: {e}")))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| FieldError::Other(anyhow::Error::new(e).context("write frame JSON")))
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> FieldResult<()> {
        self.write_line(&serde_json::json!({ "config": cfg }))
    }

    fn push_frame(&mut self, frame: &Frame) -> FieldResult<()> {
        self.write_line(frame)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> FieldResult<()> {
        self.out
            .flush()
            .map_err(|e| FieldError::Other(anyhow::Error::new(e).context("flush frame JSON")))
    }
}

/// Counts frames and primitives without keeping them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSink {
    /// Frames pushed.
    pub frames: u64,
    /// Primitives across all pushed frames.
    pub primitives: u64,
}

impl FrameSink for CountingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> FieldResult<()> {
        *self = Self::default();
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame) -> FieldResult<()> {
        self.frames += 1;
        self.primitives += frame.primitive_count() as u64;
        Ok(())
    }

    fn end(&mut self) -> FieldResult<()> {
        Ok(())
    }
}

/// Shared flag a consumer can set to stop [`drive_into`] between frames.
#[derive(Debug, Default, Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop; takes effect before the next frame.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether `cancel` was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of [`drive_into`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriveStats {
    /// Frames pushed into the sink.
    pub frames: u64,
    /// Whether the run stopped on a cancel request.
    pub cancelled: bool,
}

/// Pull frames from `driver` into `sink` until the driver is exhausted, `max_frames` frames were
/// pushed, or `cancel` is set. The token is checked before each frame is computed.
///
/// Once `begin` succeeded, `end` is always called, including when a frame or the sink fails; the
/// first error wins.
#[tracing::instrument(skip_all, fields(total = driver.remaining_frames()))]
pub fn drive_into(
    driver: &mut AnimationDriver,
    sink: &mut dyn FrameSink,
    max_frames: Option<u64>,
    cancel: Option<&CancelToken>,
) -> FieldResult<DriveStats> {
    sink.begin(SinkConfig {
        fps: driver.fps(),
        total_frames: driver.remaining_frames(),
        layers: driver.layer_names().map(str::to_owned).collect(),
    })?;

    let mut stats = DriveStats::default();
    let pumped = pump(driver, sink, max_frames, cancel, &mut stats);
    if let Err(e) = &pumped {
        tracing::warn!(error = %e, frames = stats.frames, "drive aborted");
    }
    let ended = sink.end();
    pumped?;
    ended?;
    Ok(stats)
}

fn pump(
    driver: &mut AnimationDriver,
    sink: &mut dyn FrameSink,
    max_frames: Option<u64>,
    cancel: Option<&CancelToken>,
    stats: &mut DriveStats,
) -> FieldResult<()> {
    loop {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            stats.cancelled = true;
            tracing::debug!(frames = stats.frames, "drive cancelled");
            return Ok(());
        }
        if max_frames.is_some_and(|m| stats.frames >= m) {
            return Ok(());
        }
        let Some(frame) = driver.next() else {
            return Ok(());
        };
        sink.push_frame(&frame?)?;
        stats.frames += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
