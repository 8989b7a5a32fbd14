use thiserror::Error;

/// Errors surfaced by the rate conversion core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RetimeError {
    /// A frame's timestamp is earlier than one already committed.
    ///
    /// Fatal when feeding a [`RateConverter`](crate::RateConverter)
    /// directly; the [`ReorderingStage`](crate::ReorderingStage) catches
    /// it, drops the frame, and keeps the stream going.
    #[error("frame is out of order: timestamp {current}s is earlier than previous {previous}s")]
    OutOfOrderFrame { previous: f64, current: f64 },
}
