//! Raster demodulation (spec.md §4.6).
//!
//! Walks the transmitted lines in order — each line's sync search starts
//! where the previous line's porch ended, so lines cannot be demodulated
//! out of order — but within a line, every channel's every pixel is an
//! independent frequency-to-intensity mapping over its own window, which
//! is why the inner loop is handed to `rayon` (spec.md §5's note that the
//! per-pixel work is "order-independent and parallelizable without change
//! of output").
//!
//! Sync loss or running past end-of-stream partway through an image is not
//! an error (spec.md §7): the grid was zero-initialized up front, so the
//! unfinished rows are simply left black and the function returns what it
//! has.

use ndarray::Array3;
use rayon::prelude::*;

use crate::modes::ModeDescriptor;
use crate::sample::SampleStream;
use crate::spectrum::FrequencyEstimator;
use crate::sync::track_sync;

/// The raw demodulated channel grid, shape `[height, num_channels, width]`,
/// intensities already clamped to `0..=255` but not yet color-converted.
pub type RasterGrid = Array3<u8>;

/// Demodulate every transmitted line of `mode` starting at `image_start`.
pub fn demodulate_raster(samples: &SampleStream, mode: &ModeDescriptor, image_start: usize) -> RasterGrid {
    let fs = samples.sample_rate();
    let mut grid = Array3::<u8>::zeros((mode.height, mode.num_channels, mode.width));

    let pixel_samples = (mode.pixel_time_sec * fs as f64).round() as usize;
    let window_samples = ((mode.pixel_time_sec * mode.window_factor) * fs as f64).round() as usize;
    let window_samples = window_samples.max(2);
    let porch_samples = (mode.porch_time_sec * fs as f64).round() as usize;

    let mut line_start = image_start;

    for row in 0..mode.height {
        let Some(sync_end) = track_sync(samples, mode, line_start) else {
            break;
        };
        let channels_start = sync_end + porch_samples;

        let line_len = mode.num_channels * mode.width * pixel_samples;
        let Some(line) = samples.window(channels_start, line_len) else {
            break;
        };

        let mut row_pixels = vec![0u8; mode.num_channels * mode.width];
        row_pixels
            .par_chunks_mut(mode.width)
            .enumerate()
            .for_each(|(channel, out_row)| {
                let mut estimator = FrequencyEstimator::new(window_samples);
                let channel_offset = channel * mode.width * pixel_samples;
                for (pixel, out) in out_row.iter_mut().enumerate() {
                    let pixel_center = channel_offset + pixel * pixel_samples + pixel_samples / 2;
                    let max_start = line.len().saturating_sub(window_samples);
                    let window_start = pixel_center.saturating_sub(window_samples / 2).min(max_start);
                    let window = &line[window_start..window_start + window_samples];
                    let freq = estimator.estimate(window, fs);
                    *out = frequency_to_intensity(freq, mode.pixel_min_hz, mode.pixel_max_hz);
                }
            });

        for channel in 0..mode.num_channels {
            for pixel in 0..mode.width {
                grid[[row, channel, pixel]] = row_pixels[channel * mode.width + pixel];
            }
        }

        line_start = channels_start + line_len;
    }

    grid
}

/// Map a demodulated frequency linearly onto `0..=255`, clamping at both
/// ends (spec.md §4.6).
fn frequency_to_intensity(freq: f64, min_hz: f64, max_hz: f64) -> u8 {
    let scaled = (freq - min_hz) / (max_hz - min_hz) * 256.0;
    scaled.clamp(0.0, 255.0).round() as u8
}
