//! End-to-end decode scenarios exercised through the public API only.

use sstv_core::config::DecodeOptions;
use sstv_core::error::DecodeError;
use sstv_core::logging::NullLog;
use sstv_core::modes::lookup_mode;
use sstv_core::protocol::{BIT_TIME_SEC, BREAK_HZ, BREAK_TIME_SEC, LEADER_HZ, LEADER_TIME_SEC};
use sstv_core::sample::SampleStream;
use sstv_core::{decode, decode_with};
use std::f64::consts::TAU;

fn tone(freq: f64, sample_rate: u32, duration_sec: f64) -> Vec<f64> {
    let n = (duration_sec * sample_rate as f64).round() as usize;
    (0..n)
        .map(|i| (TAU * freq * i as f64 / sample_rate as f64).sin())
        .collect()
}

fn silence(duration_sec: f64, sample_rate: u32) -> Vec<f64> {
    let n = (duration_sec * sample_rate as f64).round() as usize;
    vec![0.0; n]
}

fn vis_tones(fs: u32, word: u8) -> Vec<f64> {
    let mut audio = Vec::new();
    for i in 0..8 {
        let bit = (word >> i) & 1;
        let freq = if bit == 1 { 1100.0 } else { 1300.0 };
        audio.extend(tone(freq, fs, BIT_TIME_SEC));
    }
    audio
}

fn calibration_header(fs: u32) -> Vec<f64> {
    let mut audio = Vec::new();
    audio.extend(tone(LEADER_HZ, fs, LEADER_TIME_SEC));
    audio.extend(tone(BREAK_HZ, fs, BREAK_TIME_SEC));
    audio.extend(tone(LEADER_HZ, fs, LEADER_TIME_SEC));
    audio.extend(tone(BREAK_HZ, fs, BIT_TIME_SEC));
    audio
}

#[test]
fn s1_pd120_header_and_vis_are_recognized() {
    let fs = 44_100u32;
    let mut audio = calibration_header(fs);
    audio.extend(vis_tones(fs, 0x5F));

    let mode = lookup_mode(95).unwrap();
    audio.extend(tone(mode.sync_hz, fs, mode.sync_time_sec));
    audio.extend(tone(mode.porch_hz, fs, mode.porch_time_sec));
    let mid_hz = (mode.pixel_min_hz + mode.pixel_max_hz) / 2.0;
    for _ in 0..mode.num_channels * mode.width {
        audio.extend(tone(mid_hz, fs, mode.pixel_time_sec));
    }
    audio.extend(silence(0.2, fs));

    let stream = SampleStream::new(audio, fs);
    let image = decode(&stream).expect("S1 recording should decode");
    assert_eq!(image.shape(), &[mode.height * 2, mode.width, 3]);
}

#[test]
fn s3_corrupt_parity_is_a_fatal_error() {
    let fs = 44_100u32;
    let mut audio = calibration_header(fs);
    // 0x1F has odd parity.
    audio.extend(vis_tones(fs, 0x1F));
    audio.extend(silence(0.1, fs));

    let stream = SampleStream::new(audio, fs);
    let err = decode(&stream).unwrap_err();
    assert!(matches!(err, DecodeError::VisParityError { word: 0x1F }));
}

#[test]
fn s5_silence_never_finds_a_header() {
    let fs = 44_100u32;
    let stream = SampleStream::new(silence(2.0, fs), fs);
    let err = decode(&stream).unwrap_err();
    assert!(matches!(err, DecodeError::HeaderNotFound));
}

#[test]
fn forced_mode_skips_header_search_entirely() {
    let fs = 44_100u32;
    let mode = lookup_mode(95).unwrap();

    let mut audio = Vec::new();
    audio.extend(tone(mode.sync_hz, fs, mode.sync_time_sec));
    audio.extend(tone(mode.porch_hz, fs, mode.porch_time_sec));
    let mid_hz = (mode.pixel_min_hz + mode.pixel_max_hz) / 2.0;
    for _ in 0..mode.num_channels * mode.width {
        audio.extend(tone(mid_hz, fs, mode.pixel_time_sec));
    }
    audio.extend(silence(0.1, fs));

    let stream = SampleStream::new(audio, fs);
    let options = DecodeOptions::new().with_forced_mode(95);
    let image = decode_with(&stream, &options, &NullLog).expect("forced-mode decode should succeed");
    assert_eq!(image.shape(), &[mode.height * 2, mode.width, 3]);
}
