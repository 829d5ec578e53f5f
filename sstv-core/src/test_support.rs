//! Synthetic audio fixtures shared by unit tests across this crate.

use std::f64::consts::TAU;

/// Generate `duration_sec` seconds of a pure sine tone at `freq` Hz.
pub fn tone(freq: f64, sample_rate: u32, duration_sec: f64) -> Vec<f64> {
    let n = (duration_sec * sample_rate as f64).round() as usize;
    (0..n)
        .map(|i| (TAU * freq * i as f64 / sample_rate as f64).sin())
        .collect()
}

/// Generate `duration_sec` seconds of silence.
pub fn silence(duration_sec: f64, sample_rate: u32) -> Vec<f64> {
    let n = (duration_sec * sample_rate as f64).round() as usize;
    vec![0.0; n]
}
