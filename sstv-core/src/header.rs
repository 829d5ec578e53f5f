//! Calibration-header search (spec.md §4.3).
//!
//! The header is four contiguous frequency blocks: leader, break, leader,
//! VIS-start bit. The locator slides a candidate start index forward in
//! 2 ms steps and, at each candidate, probes all four expected block
//! offsets with a 10 ms window; when all four match simultaneously it
//! returns the sample index where the VIS data bits begin.

use crate::modes::ModeDescriptor;
use crate::protocol::{BIT_TIME_SEC, BREAK_HZ, BREAK_TIME_SEC, FREQ_MARGIN_HZ, LEADER_HZ, LEADER_TIME_SEC};
use crate::sample::SampleStream;
use crate::spectrum::FrequencyEstimator;

/// Search `samples` for the four-block calibration preamble and return the
/// sample index where the VIS data bits begin, or `None` if the scan
/// reaches end-of-stream without a match.
pub fn find_header(samples: &SampleStream, mode: &ModeDescriptor) -> Option<usize> {
    let fs = samples.sample_rate();
    let num_samples = samples.num_samples();

    let header_time_sec = 2.0 * LEADER_TIME_SEC + BREAK_TIME_SEC + BIT_TIME_SEC;
    let header_size = (header_time_sec * fs as f64).round() as usize;
    let window_size = (0.010 * fs as f64).round() as usize;
    let jump_size = ((0.002 * fs as f64).round() as usize).max(1);

    if num_samples < header_size {
        return None;
    }

    let leader_1_offset = 0usize;
    let break_offset = (LEADER_TIME_SEC * fs as f64).round() as usize;
    let leader_2_offset = ((BREAK_TIME_SEC + LEADER_TIME_SEC) * fs as f64).round() as usize;
    let vis_start_offset = ((2.0 * LEADER_TIME_SEC + BREAK_TIME_SEC) * fs as f64).round() as usize;

    let mut estimator = FrequencyEstimator::new(window_size);

    let mut current_sample = 0usize;
    while current_sample < num_samples - header_size {
        let leader_1_found = probe(
            samples,
            &mut estimator,
            current_sample + leader_1_offset,
            window_size,
            fs,
            LEADER_HZ,
        );
        let break_found = probe(
            samples,
            &mut estimator,
            current_sample + break_offset,
            window_size,
            fs,
            BREAK_HZ,
        );
        let leader_2_found = probe(
            samples,
            &mut estimator,
            current_sample + leader_2_offset,
            window_size,
            fs,
            LEADER_HZ,
        );
        let vis_start_found = probe(
            samples,
            &mut estimator,
            current_sample + vis_start_offset,
            window_size,
            fs,
            mode.sync_hz,
        );

        if leader_1_found && break_found && leader_2_found && vis_start_found {
            return Some(current_sample + header_size);
        }

        current_sample += jump_size;
    }

    None
}

fn probe(
    samples: &SampleStream,
    estimator: &mut FrequencyEstimator,
    start: usize,
    window_size: usize,
    sample_rate: u32,
    expected_hz: f64,
) -> bool {
    match samples.window(start, window_size) {
        Some(window) => (estimator.estimate(window, sample_rate) - expected_hz).abs() < FREQ_MARGIN_HZ,
        None => false,
    }
}
