//! Per-line sync tracking (spec.md §4.5).
//!
//! Between transmitted lines the sync tracker steps forward one sample at
//! a time looking for the trailing edge of the line's sync pulse, rather
//! than jumping by a fixed probe window the way the header locator does —
//! the Open Question in spec.md §9 decides to keep this per-sample
//! stepping rather than widen it to a coarser stride, since widening it
//! would blur the boundary the raster demodulator resumes from.
//!
//! The probe window itself is sized against the *porch*, not the sync
//! pulse: the porch is the shortest block in a transmitted line, so a
//! window any larger risks straddling it entirely and missing the
//! sync-to-porch transition the tracker is looking for.

use crate::modes::ModeDescriptor;
use crate::sample::SampleStream;
use crate::spectrum::FrequencyEstimator;

/// Locate the trailing edge of the sync pulse starting at or after
/// `align_start`, returning the sample index the next line's porch begins
/// at.
///
/// Returns `None` if a full probe window would run past end-of-stream
/// before a non-sync sample is found — the caller treats this as "no more
/// lines", not an error.
pub fn track_sync(samples: &SampleStream, mode: &ModeDescriptor, align_start: usize) -> Option<usize> {
    let fs = samples.sample_rate();
    let sync_window = probe_window_len(mode, fs);

    let mut estimator = FrequencyEstimator::new(sync_window);
    let mut i = align_start;

    loop {
        let window = samples.window(i, sync_window)?;
        let peak = estimator.estimate(window, fs);
        if (peak - mode.sync_hz).abs() >= crate::protocol::FREQ_MARGIN_HZ {
            return Some(i);
        }
        i += 1;
    }
}

/// Half the porch duration, rounded and floored at 2 samples — short
/// enough that a window fits entirely inside the porch immediately after
/// the sync pulse ends.
fn probe_window_len(mode: &ModeDescriptor, sample_rate: u32) -> usize {
    let len = (0.5 * mode.porch_time_sec * sample_rate as f64).round() as usize;
    len.max(2)
}
