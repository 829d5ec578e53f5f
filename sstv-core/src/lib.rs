//! SSTV core decoding library.
//!
//! A Rust-native implementation of a Slow-Scan Television demodulator:
//! calibration-header detection, VIS mode identification, per-line sync
//! tracking, frequency-to-intensity raster demodulation, and color-space
//! conversion to RGB. Everything here operates on an in-memory
//! [`sample::SampleStream`]; reading WAV files and writing images is the
//! caller's concern.

pub mod color;
pub mod config;
pub mod decoder;
pub mod error;
pub mod header;
pub mod logging;
pub mod modes;
pub mod protocol;
pub mod raster;
pub mod sample;
pub mod spectrum;
pub mod sync;
pub mod vis;

#[cfg(test)]
pub(crate) mod test_support;

pub use color::Image;
pub use config::DecodeOptions;
pub use decoder::{decode, decode_with};
pub use error::{DecodeError, Result};
pub use logging::{DecodeLog, LogLevel, NullLog};
pub use modes::{ColorSpace, ModeDescriptor};
pub use sample::SampleStream;
