pub mod scripted;

pub use scripted::ScriptedSource;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::retimer::Frame;

/// Frame capture backend trait
///
/// Implementations push frames in best-effort order, one at a time, over
/// the returned channel. Closing the channel is the explicit end-of-stream
/// signal; no frame may be delivered after it.
#[async_trait::async_trait]
pub trait CaptureSource: Send + Sync {
    /// Start capturing frames
    ///
    /// Returns a channel receiver that will receive captured frames
    async fn start(&mut self) -> Result<mpsc::Receiver<Frame>>;

    /// Stop capturing frames
    async fn stop(&mut self) -> Result<()>;

    /// Check if the source is currently capturing
    fn is_capturing(&self) -> bool;

    /// Get source name for logging
    fn name(&self) -> &str;
}
