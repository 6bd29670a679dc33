//! # Runtime Telemetry
//!
//! The render guard reads two host signals: heap usage and frame rate.
//! Both are advisory. A host that cannot report one returns `None`, and
//! the guard skips that budget.

use std::collections::VecDeque;
use std::time::Duration;

/// Read-only host runtime signals.
pub trait RuntimeTelemetry {
    /// Heap currently in use, in bytes.
    fn heap_used_bytes(&self) -> Option<u64>;

    /// Current or estimated frames per second.
    fn frames_per_second(&self) -> Option<f64>;
}

/// Telemetry for hosts that report nothing. Only the node budget applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTelemetry;

impl RuntimeTelemetry for NoTelemetry {
    fn heap_used_bytes(&self) -> Option<u64> {
        None
    }

    fn frames_per_second(&self) -> Option<f64> {
        None
    }
}

/// Fixed readings, for hosts that sample elsewhere and for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaticTelemetry {
    /// Heap in use, bytes.
    pub heap_used_bytes: Option<u64>,
    /// Frames per second.
    pub frames_per_second: Option<f64>,
}

impl RuntimeTelemetry for StaticTelemetry {
    fn heap_used_bytes(&self) -> Option<u64> {
        self.heap_used_bytes
    }

    fn frames_per_second(&self) -> Option<f64> {
        self.frames_per_second
    }
}

/// Rolling frame-rate estimate over the last `capacity` frames.
///
/// ```
/// use std::time::Duration;
/// use aibos_hierarchy::{FrameRateMeter, RuntimeTelemetry};
///
/// let mut meter = FrameRateMeter::new(4);
/// for _ in 0..4 {
///     meter.record_frame(Duration::from_millis(20));
/// }
/// let fps = meter.frames_per_second().unwrap_or_default();
/// assert!((fps - 50.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct FrameRateMeter {
    frames: VecDeque<Duration>,
    capacity: usize,
    total: Duration,
}

impl FrameRateMeter {
    /// Frames averaged by [`FrameRateMeter::default`].
    pub const DEFAULT_WINDOW: usize = 60;

    /// A meter averaging over `capacity` frames (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
            total: Duration::ZERO,
        }
    }

    /// Record the duration of one rendered frame.
    pub fn record_frame(&mut self, frame_time: Duration) {
        if self.frames.len() == self.capacity {
            if let Some(oldest) = self.frames.pop_front() {
                self.total = self.total.saturating_sub(oldest);
            }
        }
        self.frames.push_back(frame_time);
        self.total = self.total.saturating_add(frame_time);
    }

    /// Frames currently in the window.
    pub fn samples(&self) -> usize {
        self.frames.len()
    }

    /// Discard all samples.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.total = Duration::ZERO;
    }
}

impl Default for FrameRateMeter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl RuntimeTelemetry for FrameRateMeter {
    fn heap_used_bytes(&self) -> Option<u64> {
        None
    }

    /// `None` until a frame has been recorded, or when every recorded
    /// frame took zero time.
    fn frames_per_second(&self) -> Option<f64> {
        let secs = self.total.as_secs_f64();
        if self.frames.is_empty() || secs <= 0.0 {
            return None;
        }
        Some(self.frames.len() as f64 / secs)
    }
}
