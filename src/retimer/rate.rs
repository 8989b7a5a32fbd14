use crate::error::RetimeError;
use crate::sink::FrameSink;

use super::frame::Frame;

/// Converts a strictly ordered stream of timestamped frames into sink
/// writes paced at a fixed output frame rate.
///
/// Each accepted frame is emitted once per output interval boundary that
/// has elapsed since the last emission, so a gap in the input is filled
/// with copies of the newly arrived frame. Frames whose timestamp falls
/// before the next boundary are skipped; duplicate timestamps collapse to
/// a single emission.
///
/// Input must be non-decreasing in timestamp. The converter does not
/// reorder; wrap it in a [`ReorderingStage`](super::ReorderingStage) to
/// tolerate bounded out-of-order arrival.
pub struct RateConverter<S> {
    sink: S,
    frame_interval: f64,
    previous_timestamp: Option<f64>,
    last_write_time: Option<f64>,
}

impl<S: FrameSink> RateConverter<S> {
    /// `fps` must already be validated positive, see
    /// [`RecorderConfig::validate`](crate::RecorderConfig::validate).
    pub fn new(fps: f64, sink: S) -> Self {
        Self {
            sink,
            frame_interval: 1.0 / fps,
            previous_timestamp: None,
            last_write_time: None,
        }
    }

    /// Accept one frame, returning the number of emissions it produced.
    ///
    /// An out-of-order timestamp is an upstream contract violation: the
    /// error is returned, the frame takes no effect, and the converter's
    /// state is unchanged.
    pub fn process(&mut self, frame: &Frame) -> Result<usize, RetimeError> {
        if let Some(previous) = self.previous_timestamp {
            if previous > frame.timestamp {
                return Err(RetimeError::OutOfOrderFrame {
                    previous,
                    current: frame.timestamp,
                });
            }
            if previous == frame.timestamp {
                return Ok(0);
            }
        }

        self.previous_timestamp = Some(frame.timestamp);

        Ok(self.write_paced(frame))
    }

    fn write_paced(&mut self, frame: &Frame) -> usize {
        if !self.sink.writable() {
            return 0;
        }

        // The first emission anchors the output clock to the first real
        // frame's timestamp.
        let Some(mut last) = self.last_write_time else {
            self.sink.write(&frame.payload);
            self.last_write_time = Some(frame.timestamp);
            return 1;
        };

        let mut written = 0;
        while frame.timestamp >= last + self.frame_interval {
            if !self.sink.writable() {
                break;
            }
            self.sink.write(&frame.payload);
            last += self.frame_interval;
            written += 1;
        }
        self.last_write_time = Some(last);

        written
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
