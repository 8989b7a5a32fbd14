pub mod session;
pub mod stats;

pub use session::RecordingSession;
pub use stats::SessionStats;
