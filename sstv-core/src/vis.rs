//! VIS code decoding (spec.md §4.4).
//!
//! Starting at the sample position the header locator returns, reads 8
//! consecutive bit slots and assembles the VIS byte LSB-first, validating
//! even parity before returning the 7-bit code.

use thiserror::Error;

use crate::protocol::{BIT_TIME_SEC, BREAK_HZ};
use crate::sample::SampleStream;
use crate::spectrum::FrequencyEstimator;

/// VIS decode failure. Always fatal per spec.md §7 — the decoder never
/// returns a guessed code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VisError {
    #[error("VIS byte failed even-parity check: {word:#010b}")]
    ParityMismatch { word: u8 },
    #[error("recording ended before all 8 VIS bit slots could be read")]
    Truncated,
}

/// Decode the 8-bit VIS word (7 data bits + parity) starting at `start`,
/// returning the 7-bit VIS code on success.
pub fn decode_vis(samples: &SampleStream, start: usize) -> Result<u8, VisError> {
    let fs = samples.sample_rate();
    let bit_size = (BIT_TIME_SEC * fs as f64).round() as usize;

    let mut estimator = FrequencyEstimator::new(bit_size);
    let mut word: u8 = 0;

    for i in 0..8 {
        let slot_start = start + i * bit_size;
        let window = samples
            .window(slot_start, bit_size)
            .ok_or(VisError::Truncated)?;
        let peak = estimator.estimate(window, fs);
        // 1100 Hz (binary "1") and 1300 Hz (binary "0") straddle BREAK_HZ.
        let bit = if peak <= BREAK_HZ { 1u8 } else { 0u8 };
        word |= bit << i;
    }

    if word.count_ones() % 2 != 0 {
        return Err(VisError::ParityMismatch { word });
    }

    Ok(word & 0x7F)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tone;

    fn vis_audio(fs: u32, word: u8) -> Vec<f64> {
        let mut audio = Vec::new();
        for i in 0..8 {
            let bit = (word >> i) & 1;
            let freq = if bit == 1 { 1100.0 } else { 1300.0 };
            audio.extend(tone(freq, fs, BIT_TIME_SEC));
        }
        audio
    }

    #[test]
    fn decodes_pd120_vis_code() {
        // spec.md S1: VIS_byte = 0x5F (vis = 95, even parity).
        let fs = 44_100u32;
        let audio = vis_audio(fs, 0x5F);
        let stream = SampleStream::new(audio, fs);
        assert_eq!(decode_vis(&stream, 0), Ok(95));
    }

    #[test]
    fn odd_parity_is_rejected() {
        // spec.md S3: VIS byte 0x1F has odd parity.
        let fs = 44_100u32;
        let audio = vis_audio(fs, 0x1F);
        let stream = SampleStream::new(audio, fs);
        assert_eq!(
            decode_vis(&stream, 0),
            Err(VisError::ParityMismatch { word: 0x1F })
        );
    }

    #[test]
    fn truncated_recording_is_reported() {
        let fs = 44_100u32;
        let stream = SampleStream::new(vec![0.0; 10], fs);
        assert_eq!(decode_vis(&stream, 0), Err(VisError::Truncated));
    }
}
