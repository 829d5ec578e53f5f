//! Top-level decode orchestration (spec.md §4, §5).
//!
//! Wires the pipeline stages in their strict dependency order: header
//! search, VIS decode, mode lookup, sync tracking, raster demodulation,
//! color conversion. Each stage's entry point is in its own module; this
//! file only sequences them and reports progress through the injected
//! [`DecodeLog`].

use crate::color::{self, Image};
use crate::config::DecodeOptions;
use crate::error::{DecodeError, Result};
use crate::header::find_header;
use crate::logging::{DecodeLog, NullLog};
use crate::modes::lookup_mode;
use crate::raster::demodulate_raster;
use crate::sample::SampleStream;
use crate::vis::decode_vis;

/// Decode `samples` into an RGB image using the default options and a
/// no-op logger.
pub fn decode(samples: &SampleStream) -> Result<Image> {
    decode_with(samples, &DecodeOptions::default(), &NullLog)
}

/// Decode `samples` into an RGB image, applying `options` and reporting
/// pipeline-stage progress to `log`.
pub fn decode_with(samples: &SampleStream, options: &DecodeOptions, log: &dyn DecodeLog) -> Result<Image> {
    let (vis, image_start) = match options.force_skip_header {
        Some(vis) => {
            log.info("header", "skipping header search, VIS forced by caller");
            (vis, 0usize)
        }
        None => {
            log.debug("header", "searching for calibration header");
            let header_end = find_header_any(samples).ok_or(DecodeError::HeaderNotFound)?;
            log.info("header", "calibration header located");

            log.debug("vis", "decoding VIS word");
            let vis = decode_vis(samples, header_end).map_err(|err| match err {
                crate::vis::VisError::ParityMismatch { word } => DecodeError::VisParityError { word },
                crate::vis::VisError::Truncated => DecodeError::HeaderNotFound,
            })?;
            log.info("vis", "VIS word decoded");
            (vis, header_end + vis_block_len(samples.sample_rate()))
        }
    };

    let mode = lookup_mode(vis).ok_or(DecodeError::UnsupportedMode { vis })?;
    log.info("mode", mode.name);

    let aligned_start = (image_start as i64 + options.align_add).max(0) as usize;

    log.debug("raster", "demodulating raster");
    let grid = demodulate_raster(samples, mode, aligned_start);
    log.info("raster", "raster demodulation complete");

    log.debug("color", "converting to RGB");
    let image = color::to_rgb(&grid, mode)?;
    log.info("color", "color conversion complete");

    Ok(image)
}

/// `find_header` needs a mode descriptor to probe the VIS-start bit
/// frequency, but the mode isn't known until after VIS decode. Every mode
/// in the table is tried in turn; in practice there is one mode, so this
/// degrades to a single probe, but the loop keeps the header search
/// correct as more modes are added.
fn find_header_any(samples: &SampleStream) -> Option<usize> {
    crate::modes::MODE_TABLE
        .iter()
        .find_map(|mode| find_header(samples, mode))
}

fn vis_block_len(sample_rate: u32) -> usize {
    (8.0 * crate::protocol::BIT_TIME_SEC * sample_rate as f64).round() as usize
}
