// Shared fixtures for the retiming pipeline tests
//
// Frames carry their own timestamp as a text payload ("1.5,"), so the
// sink output reads as a comma-separated trace of what was emitted.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use retimer::{Frame, MemorySink, RateConverter, RetimeError};

pub fn frame(timestamp: f64) -> Frame {
    Frame::new(format!("{},", timestamp), timestamp)
}

pub fn three_frames_at_1s_2s_3s() -> Vec<Frame> {
    vec![frame(1.0), frame(2.0), frame(3.0)]
}

pub fn three_frames_at_1s_3s_2s() -> Vec<Frame> {
    vec![frame(1.0), frame(3.0), frame(2.0)]
}

pub fn twenty_fps_input_between_1s_and_3s() -> Vec<Frame> {
    generate_frames(1.0, 3.999, 20.0)
}

pub fn inconsistent_fps_input_between_1s_and_10s() -> Vec<Frame> {
    let mut frames = generate_frames(1.0, 1.999, 20.0);
    frames.extend(generate_frames(2.0, 2.999, 3.0));
    frames.extend(generate_frames(3.0, 3.999, 100.0));
    frames.extend(generate_frames(4.0, 4.999, 1.0));
    frames.extend(generate_frames(5.0, 5.999, 100.0));
    frames
}

pub fn input_with_wrong_order_between_1s_and_5s() -> Vec<Frame> {
    let mut frames = generate_frames(1.0, 1.999, 20.0);
    frames.extend(generate_frames(3.0, 3.999, 20.0));
    frames.extend(generate_frames(2.0, 2.999, 10.0));
    frames.extend(generate_frames(5.0, 5.999, 15.0));
    frames.extend(generate_frames(4.0, 4.999, 1.0));
    frames
}

/// Frames from `from_second` (inclusive) to `up_to_second` (exclusive) at
/// the given input rate, timestamps rounded to 1e-5 seconds
pub fn generate_frames(from_second: f64, up_to_second: f64, fps: f64) -> Vec<Frame> {
    let mut elapsed = from_second;
    let mut frames = Vec::new();

    while elapsed < up_to_second {
        frames.push(frame((elapsed * 100_000.0).round() / 100_000.0));
        elapsed += 1.0 / fps;
    }

    frames
}

pub fn converter(fps: f64) -> RateConverter<MemorySink> {
    RateConverter::new(fps, MemorySink::new())
}

pub fn process_all(
    converter: &mut RateConverter<MemorySink>,
    frames: Vec<Frame>,
) -> Result<(), RetimeError> {
    for frame in frames {
        converter.process(&frame)?;
    }
    Ok(())
}

pub fn written(sink: &MemorySink) -> String {
    String::from_utf8(sink.concat()).unwrap()
}

/// Number of emissions of the frame labelled `label` in a sink trace
pub fn count_of(output: &str, label: &str) -> usize {
    output.split(',').filter(|part| *part == label).count()
}

pub fn total_emissions(output: &str) -> usize {
    output.split(',').count() - 1
}
