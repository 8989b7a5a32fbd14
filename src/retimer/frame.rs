use bytes::Bytes;

/// One timestamped unit of image payload from the capture source
#[derive(Debug, Clone)]
pub struct Frame {
    /// Encoded still image bytes; the pipeline never inspects the content
    pub payload: Bytes,

    /// Capture time in seconds. Intended to be monotonic, but the source
    /// does not guarantee it.
    pub timestamp: f64,

    /// Display duration hint from the source, if it provides one
    pub duration: Option<f64>,
}

impl Frame {
    pub fn new(payload: impl Into<Bytes>, timestamp: f64) -> Self {
        Self {
            payload: payload.into(),
            timestamp,
            duration: None,
        }
    }
}
