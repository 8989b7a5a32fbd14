use tracing::warn;

use crate::config::RecorderConfig;
use crate::error::RetimeError;
use crate::sink::FrameSink;

use super::frame::Frame;
use super::queue::SortedQueue;
use super::rate::RateConverter;

/// Lifecycle of a reordering stage within one recording session. There is
/// no transition out of `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Idle,
    Active,
    Flushing,
    Closed,
}

/// Bounded look-ahead window in front of a [`RateConverter`].
///
/// Frames are held in timestamp order until the window is full, then the
/// oldest is committed to the converter. A frame arriving more than the
/// window's worth of frames late can no longer be resequenced; the
/// converter rejects it and the stage drops it with a warning instead of
/// failing the session.
pub struct ReorderingStage<S> {
    capacity: usize,
    buffer: SortedQueue<Frame>,
    converter: RateConverter<S>,
    state: StageState,
    frames_accepted: u64,
    frames_written: u64,
    frames_dropped: u64,
}

impl<S: FrameSink> ReorderingStage<S> {
    pub fn new(config: &RecorderConfig, sink: S) -> Self {
        Self {
            capacity: config.input_frames_to_buffer,
            buffer: SortedQueue::new(),
            converter: RateConverter::new(config.fps, sink),
            state: StageState::Idle,
            frames_accepted: 0,
            frames_written: 0,
            frames_dropped: 0,
        }
    }

    /// Insert a frame into the window, committing the oldest buffered
    /// frames once the window is over capacity. Frames arriving after
    /// [`flush`](Self::flush) are ignored; the caller contract is that no
    /// frame is delivered once stream end was signalled.
    pub fn accept(&mut self, frame: Frame) {
        match self.state {
            StageState::Idle => self.state = StageState::Active,
            StageState::Active => {}
            StageState::Flushing | StageState::Closed => {
                warn!(
                    timestamp = frame.timestamp,
                    "Frame received after flush, ignoring"
                );
                return;
            }
        }

        self.frames_accepted += 1;
        let timestamp = frame.timestamp;
        self.buffer.enqueue(frame, timestamp);
        self.commit_down_to(self.capacity);
    }

    /// Drain every buffered frame through the converter in timestamp
    /// order. Called once at stream end; subsequent calls are no-ops.
    pub fn flush(&mut self) {
        if self.state == StageState::Closed {
            return;
        }

        self.state = StageState::Flushing;
        self.commit_down_to(0);
        self.state = StageState::Closed;
    }

    fn commit_down_to(&mut self, keep: usize) {
        while self.buffer.len() > keep {
            let frame = self
                .buffer
                .remove_minimum()
                .expect("buffer reported non-empty");

            match self.converter.process(&frame) {
                Ok(written) => self.frames_written += written as u64,
                Err(e @ RetimeError::OutOfOrderFrame { .. }) => {
                    self.frames_dropped += 1;
                    warn!("Skipping frame: {}", e);
                }
            }
        }
    }

    pub fn state(&self) -> StageState {
        self.state
    }

    /// Frames delivered via [`accept`](Self::accept)
    pub fn frames_accepted(&self) -> u64 {
        self.frames_accepted
    }

    /// Emissions written to the sink so far
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Frames dropped for arriving outside the reordering window
    pub fn frames_dropped(&self) -> u64 {
        self.frames_dropped
    }

    pub fn sink(&self) -> &S {
        self.converter.sink()
    }

    /// Hand the sink back after the stage is done, so the integrator can
    /// close it
    pub fn into_sink(self) -> S {
        self.converter.into_sink()
    }
}
