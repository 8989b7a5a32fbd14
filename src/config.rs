use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the frame retiming pipeline
///
/// Built once per recording session with `Default` plus field overrides,
/// then validated at session construction. Neither core component
/// re-checks it at frame time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Target output frame rate (emissions per second of source time)
    pub fps: f64,

    /// Number of frames held back to tolerate out-of-order arrival.
    /// Larger windows trade latency for reordering tolerance; 0 commits
    /// every frame immediately.
    pub input_frames_to_buffer: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            fps: 15.0,
            input_frames_to_buffer: 100,
        }
    }
}

impl RecorderConfig {
    pub fn new(fps: f64) -> Self {
        Self {
            fps,
            ..Default::default()
        }
    }

    /// Reject configurations the converter cannot run with. The frame
    /// interval is `1 / fps`, so fps must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            bail!("fps must be a positive number, got {}", self.fps);
        }
        Ok(())
    }

    /// Source-time seconds between output emissions
    pub fn frame_interval(&self) -> f64 {
        1.0 / self.fps
    }
}
