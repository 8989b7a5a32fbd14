use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics about a recording session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Session identifier
    pub session_id: String,

    /// When the session started
    pub started_at: DateTime<Utc>,

    /// Total wall-clock duration in seconds
    pub duration_secs: f64,

    /// Frames delivered by the capture source
    pub frames_received: u64,

    /// Emissions written to the sink
    pub frames_written: u64,

    /// Frames dropped for arriving outside the reordering window
    pub frames_dropped: u64,
}

impl SessionStats {
    /// Fraction of received frames dropped as late stragglers
    pub fn drop_rate(&self) -> f64 {
        if self.frames_received == 0 {
            return 0.0;
        }
        self.frames_dropped as f64 / self.frames_received as f64
    }
}
