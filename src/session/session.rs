use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::info;

use crate::capture::CaptureSource;
use crate::config::RecorderConfig;
use crate::retimer::{Frame, ReorderingStage};
use crate::sink::FrameSink;

use super::stats::SessionStats;

/// A recording session that re-times captured frames into a constant-rate
/// stream for an encoder sink
///
/// One session owns one [`ReorderingStage`] (and through it one sink) for
/// its whole lifetime. Sessions are not reusable: once the stream ends and
/// the stage is flushed, a new recording needs a new session.
pub struct RecordingSession<S> {
    session_id: String,
    stage: ReorderingStage<S>,
    started_at: DateTime<Utc>,
}

impl<S: FrameSink> RecordingSession<S> {
    /// Create a new recording session, failing fast on invalid
    /// configuration
    pub fn new(config: RecorderConfig, sink: S) -> Result<Self> {
        config
            .validate()
            .context("Invalid recorder configuration")?;

        let session_id = format!("recording-{}", uuid::Uuid::new_v4());
        info!(
            "Creating recording session: {} ({} fps, reordering window {})",
            session_id, config.fps, config.input_frames_to_buffer
        );

        Ok(Self {
            session_id,
            stage: ReorderingStage::new(&config, sink),
            started_at: Utc::now(),
        })
    }

    /// Start a capture source and record until its stream ends
    pub async fn record(mut self, mut source: Box<dyn CaptureSource>) -> Result<SessionStats> {
        info!(
            "Starting recording session: {} (source: {})",
            self.session_id,
            source.name()
        );

        let frame_rx = source
            .start()
            .await
            .context("Failed to start capture source")?;

        let stats = self.run(frame_rx).await?;

        source
            .stop()
            .await
            .context("Failed to stop capture source")?;

        Ok(stats)
    }

    /// Pump frames from a receiver until the channel closes, then flush
    /// the reordering window
    ///
    /// The channel closing is the stream-end signal; every buffered frame
    /// is committed in timestamp order before this returns.
    pub async fn run(&mut self, mut frame_rx: mpsc::Receiver<Frame>) -> Result<SessionStats> {
        while let Some(frame) = frame_rx.recv().await {
            self.stage.accept(frame);
        }

        self.stage.flush();

        let stats = self.stats();
        info!(
            "Recording session complete: {} ({} frames in, {} writes out, {} dropped)",
            self.session_id, stats.frames_received, stats.frames_written, stats.frames_dropped
        );

        Ok(stats)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Current session statistics
    pub fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);

        SessionStats {
            session_id: self.session_id.clone(),
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            frames_received: self.stage.frames_accepted(),
            frames_written: self.stage.frames_written(),
            frames_dropped: self.stage.frames_dropped(),
        }
    }

    /// Hand the sink back after the session ends, so the integrator can
    /// close it
    pub fn into_sink(self) -> S {
        self.stage.into_sink()
    }
}
