use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::retimer::Frame;

use super::CaptureSource;

/// Capture source that replays a prerecorded list of frames
///
/// Frames are delivered in the order given, which is not necessarily
/// timestamp order. Useful for tests and for re-running a captured
/// session through a different configuration.
pub struct ScriptedSource {
    frames: Vec<Frame>,
    handle: Option<JoinHandle<()>>,
}

impl ScriptedSource {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            handle: None,
        }
    }
}

#[async_trait::async_trait]
impl CaptureSource for ScriptedSource {
    async fn start(&mut self) -> Result<mpsc::Receiver<Frame>> {
        let frames = std::mem::take(&mut self.frames);
        info!("Replaying {} scripted frames", frames.len());

        let (tx, rx) = mpsc::channel(64);

        let handle = tokio::spawn(async move {
            for frame in frames {
                if tx.send(frame).await.is_err() {
                    // Receiver gone, nothing left to deliver
                    break;
                }
            }
        });
        self.handle = Some(handle);

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
