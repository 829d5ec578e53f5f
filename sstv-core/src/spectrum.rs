//! Peak-frequency estimation on a short window of real audio (spec.md §4.1).
//!
//! This is the hottest loop in the decoder — tens of thousands of calls per
//! image — so [`FrequencyEstimator`] owns its scratch buffers and FFT plan
//! and reuses them across calls, rather than allocating fresh buffers every
//! time the way a naive free function would (spec.md §9's design note on
//! the source's per-call `malloc`s).

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::f64::consts::PI;
use std::sync::Arc;

/// Estimates the dominant sinusoidal frequency in a window of real samples.
///
/// `rustfft` has no native real-to-complex transform, so the estimator
/// widens each real sample into a complex one with a zero imaginary part
/// and runs a full complex FFT, keeping only the first `N/2 + 1` bins —
/// the idiomatic tradeoff given the FFT crate this workspace already
/// depends on, rather than adding a second crate for r2c transforms.
pub struct FrequencyEstimator {
    plan_len: usize,
    fft: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex64>,
    magnitudes: Vec<f64>,
}

impl FrequencyEstimator {
    /// Create an estimator sized for windows of exactly `window_len` samples.
    ///
    /// `window_len` must be at least 2; see the `peak_frequency` contract
    /// in spec.md §4.1.
    pub fn new(window_len: usize) -> Self {
        assert!(window_len >= 2, "window length must be at least 2 samples");
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(window_len);
        Self {
            plan_len: window_len,
            fft,
            scratch: vec![Complex64::new(0.0, 0.0); window_len],
            magnitudes: vec![0.0; window_len / 2 + 1],
        }
    }

    /// The window length this estimator was built for.
    pub fn window_len(&self) -> usize {
        self.plan_len
    }

    /// Estimate the peak frequency of `samples` at `sample_rate` Hz.
    ///
    /// `samples.len()` must equal [`FrequencyEstimator::window_len`]. Empty
    /// input is rejected by the length assertion on construction, not here;
    /// an all-zero (or constant, post DC-removal) window returns `0.0`.
    pub fn estimate(&mut self, samples: &[f64], sample_rate: u32) -> f64 {
        assert_eq!(
            samples.len(),
            self.plan_len,
            "sample window length must match the estimator's configured length"
        );

        let n = samples.len();

        // Step 1: DC removal.
        let mean = samples.iter().sum::<f64>() / n as f64;

        // Step 2: Hann window, widened into complex scratch for the FFT.
        for (i, (&sample, slot)) in samples.iter().zip(self.scratch.iter_mut()).enumerate() {
            let hann = 0.5 * (1.0 - (2.0 * PI * i as f64 / (n - 1) as f64).cos());
            *slot = Complex64::new((sample - mean) * hann, 0.0);
        }

        // Step 3: complex FFT, retaining the first N/2 + 1 bins.
        self.fft.process(&mut self.scratch);
        let num_bins = n / 2 + 1;

        // Step 4: magnitude.
        for (mag, bin) in self
            .magnitudes
            .iter_mut()
            .zip(self.scratch[..num_bins].iter())
        {
            *mag = bin.norm();
        }
        let mags = &self.magnitudes[..num_bins];

        // Step 5: peak bin, ties broken by lowest index.
        let mut peak_index = 0usize;
        for (k, &mag) in mags.iter().enumerate().skip(1) {
            if mag > mags[peak_index] {
                peak_index = k;
            }
        }

        // Step 6: barycentric interpolation across the peak's neighbors.
        let refined_index = barycentric_interpolate(mags, peak_index);

        // Step 7.
        refined_index * sample_rate as f64 / n as f64
    }
}

/// Sub-bin frequency refinement using the argmax bin and its two
/// neighbors' magnitudes (spec.md §4.1 step 6). Out-of-range neighbors are
/// replaced with the peak's own magnitude.
fn barycentric_interpolate(magnitudes: &[f64], peak_index: usize) -> f64 {
    let b = magnitudes[peak_index];
    let a = if peak_index == 0 {
        b
    } else {
        magnitudes[peak_index - 1]
    };
    let c = if peak_index + 1 >= magnitudes.len() {
        b
    } else {
        magnitudes[peak_index + 1]
    };

    let denom = a + b + c;
    if denom == 0.0 {
        0.0
    } else {
        peak_index as f64 + (c - a) / denom
    }
}

/// One-shot convenience wrapper around [`FrequencyEstimator`] for call
/// sites outside the raster hot loop (header/VIS detection, tests) where a
/// reusable estimator would be premature.
pub fn peak_frequency(samples: &[f64], sample_rate: u32) -> f64 {
    let mut estimator = FrequencyEstimator::new(samples.len());
    estimator.estimate(samples, sample_rate)
}

/// `|peak_frequency(window) - expected_hz| < FREQ_MARGIN_HZ` (spec.md §4.3).
pub fn is_frequency(samples: &[f64], sample_rate: u32, expected_hz: f64) -> bool {
    (peak_frequency(samples, sample_rate) - expected_hz).abs() < crate::protocol::FREQ_MARGIN_HZ
}
