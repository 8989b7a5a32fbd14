use std::io::Write;

use tracing::warn;

/// Writable byte destination for retimed frame payloads, typically the
/// stdin pipe of an external video encoder.
///
/// The pipeline checks [`writable`](FrameSink::writable) before every
/// emission and stops silently for the current frame once it reports
/// false. The pipeline never closes the sink; that is the integrator's
/// responsibility after the session's flush completes.
pub trait FrameSink {
    fn writable(&self) -> bool;

    fn write(&mut self, payload: &[u8]);
}

/// In-memory sink that records every emission
///
/// Useful for tests and dry runs where the encoder process is not wired
/// up.
#[derive(Debug)]
pub struct MemorySink {
    emissions: Vec<Vec<u8>>,
    writable: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            emissions: Vec::new(),
            writable: true,
        }
    }

    /// Every payload written, in emission order
    pub fn emissions(&self) -> &[Vec<u8>] {
        &self.emissions
    }

    pub fn emission_count(&self) -> usize {
        self.emissions.len()
    }

    /// All emitted bytes concatenated, for byte-identical comparisons
    pub fn concat(&self) -> Vec<u8> {
        self.emissions.concat()
    }

    /// Simulate the sink becoming (un)available
    pub fn set_writable(&mut self, writable: bool) {
        self.writable = writable;
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for MemorySink {
    fn writable(&self) -> bool {
        self.writable
    }

    fn write(&mut self, payload: &[u8]) {
        self.emissions.push(payload.to_vec());
    }
}

/// Adapts any [`std::io::Write`] destination to a [`FrameSink`].
///
/// The first write error marks the sink unwritable for the rest of the
/// session; a torn-down encoder pipe halts emission rather than failing
/// the recording.
pub struct PipeSink<W> {
    inner: W,
    writable: bool,
}

impl<W: Write> PipeSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            writable: true,
        }
    }

    /// Hand the destination back, e.g. to close it after the session ends
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> FrameSink for PipeSink<W> {
    fn writable(&self) -> bool {
        self.writable
    }

    fn write(&mut self, payload: &[u8]) {
        if !self.writable {
            return;
        }

        if let Err(e) = self.inner.write_all(payload) {
            warn!("Sink rejected write, halting further emissions: {}", e);
            self.writable = false;
        }
    }
}
