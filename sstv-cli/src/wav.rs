//! WAV loading: read a file with `hound` and mix down to a mono `f64`
//! stream normalized to `[-1, 1]`, the shape `sstv_core::SampleStream`
//! expects.

use color_eyre::eyre::{eyre, Result};
use hound::{SampleFormat, WavReader};
use sstv_core::SampleStream;
use std::path::Path;

/// One-line summary of a WAV file's header fields, for the `-v` debug log.
pub fn header_summary(path: &Path) -> Result<String> {
    let reader = WavReader::open(path).map_err(|e| eyre!("failed to open {}: {e}", path.display()))?;
    let spec = reader.spec();
    let duration_secs = reader.duration() as f64 / spec.sample_rate as f64;
    Ok(format!(
        "{} Hz, {} channel(s), {}-bit {:?}, {:.2}s",
        spec.sample_rate, spec.channels, spec.bits_per_sample, spec.sample_format, duration_secs
    ))
}

pub fn load_mono(path: &Path) -> Result<SampleStream> {
    let mut reader = WavReader::open(path).map_err(|e| eyre!("failed to open {}: {e}", path.display()))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(eyre!("{}: WAV header declares zero channels", path.display()));
    }

    let mono: Vec<f64> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => mix_channels(reader.samples::<f32>(), channels, |s| s as f64),
        (SampleFormat::Int, 8) => mix_channels(reader.samples::<i32>(), channels, |s| s as f64 / 128.0),
        (SampleFormat::Int, 16) => mix_channels(reader.samples::<i32>(), channels, |s| s as f64 / 32_768.0),
        (SampleFormat::Int, 24) => mix_channels(reader.samples::<i32>(), channels, |s| s as f64 / 8_388_608.0),
        (SampleFormat::Int, 32) => mix_channels(reader.samples::<i32>(), channels, |s| s as f64 / 2_147_483_648.0),
        (format, bits) => {
            return Err(eyre!(
                "{}: unsupported WAV sample format {:?} at {} bits",
                path.display(),
                format,
                bits
            ))
        }
    };

    if mono.is_empty() {
        return Err(eyre!("{}: no audio samples decoded", path.display()));
    }

    Ok(SampleStream::new(mono, spec.sample_rate))
}

/// Mix an interleaved multi-channel sample iterator down to mono by
/// averaging channels, applying `normalize` to convert each raw sample to
/// `f64` first.
fn mix_channels<T, I>(samples: I, channels: usize, normalize: impl Fn(T) -> f64) -> Vec<f64>
where
    I: Iterator<Item = hound::Result<T>>,
{
    let raw: Vec<f64> = samples.filter_map(|s| s.ok()).map(normalize).collect();
    if channels == 1 {
        return raw;
    }

    raw.chunks(channels)
        .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
        .collect()
}
