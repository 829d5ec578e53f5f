//! Decode error taxonomy
//!
//! Every condition spec.md classifies as fatal surfaces as a `DecodeError`
//! variant here. Conditions spec.md classifies as non-fatal (sync lost
//! mid-image, a pixel window running past end-of-stream) are never
//! represented as errors: the raster demodulator absorbs them by leaving
//! the affected rows black and returning normally.

use thiserror::Error;

use crate::modes::ColorSpace;

/// Top-level error type for decode operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("sample source unavailable: {reason}")]
    InputUnavailable { reason: String },

    #[error("calibration header not found before end of recording")]
    HeaderNotFound,

    #[error("VIS byte failed even-parity check: {word:#010b}")]
    VisParityError { word: u8 },

    #[error("no mode descriptor registered for VIS code {vis}")]
    UnsupportedMode { vis: u8 },

    #[error("color space {space:?} has no converter")]
    UnsupportedColorSpace { space: ColorSpace },

    #[error("output sink failed: {0}")]
    OutputError(#[from] std::io::Error),
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
