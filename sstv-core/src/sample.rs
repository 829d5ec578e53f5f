//! The sample stream the core consumes.
//!
//! Everything downstream of header detection borrows a `SampleStream`
//! read-only; nothing in the core ever mutates it. How the underlying WAV
//! container is parsed, how multi-channel audio is mixed to mono, and how
//! integer PCM is normalized to `f64` are the input collaborator's concern,
//! not the core's (spec.md §6).

/// An ordered sequence of real-valued samples in `[-1, 1]` at a fixed rate.
#[derive(Debug, Clone)]
pub struct SampleStream {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl SampleStream {
    /// Build a stream from mono samples already normalized to `[-1, 1]`.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the full sample slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Borrow `len` samples starting at `start`, or `None` if that window
    /// would run past the end of the stream. Mirrors the invariant in
    /// spec.md §3: `start + window_size <= num_samples`.
    pub fn window(&self, start: usize, len: usize) -> Option<&[f64]> {
        let end = start.checked_add(len)?;
        self.samples.get(start..end)
    }
}
