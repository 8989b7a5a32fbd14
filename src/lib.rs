pub mod capture;
pub mod config;
pub mod error;
pub mod retimer;
pub mod session;
pub mod sink;

pub use capture::{CaptureSource, ScriptedSource};
pub use config::RecorderConfig;
pub use error::RetimeError;
pub use retimer::{Frame, RateConverter, ReorderingStage, SortedQueue, StageState};
pub use session::{RecordingSession, SessionStats};
pub use sink::{FrameSink, MemorySink, PipeSink};
