//! Color-space conversion (spec.md §4.7).
//!
//! `Y1CrCbY2` packs two luma samples (Y1, Y2) per chroma pair (Cr, Cb),
//! so converting one transmitted line always produces two output image
//! rows. Per the Open Question decision in spec.md §9, a mode tagged with
//! any other color space is a hard [`DecodeError::UnsupportedColorSpace`]
//! — there is no silent best-effort fallback.

use ndarray::Array3;

use crate::error::DecodeError;
use crate::modes::{ColorSpace, ModeDescriptor};
use crate::raster::RasterGrid;

/// An RGB image, shape `[height, width, 3]`.
pub type Image = Array3<u8>;

const CHANNEL_Y1: usize = 0;
const CHANNEL_CR: usize = 1;
const CHANNEL_CB: usize = 2;
const CHANNEL_Y2: usize = 3;

/// Convert a raw demodulated grid to an RGB image using `mode`'s declared
/// color space.
pub fn to_rgb(grid: &RasterGrid, mode: &ModeDescriptor) -> Result<Image, DecodeError> {
    match mode.color_space {
        ColorSpace::Y1CrCbY2 => Ok(y1_cr_cb_y2_to_rgb(grid, mode)),
    }
}

fn y1_cr_cb_y2_to_rgb(grid: &RasterGrid, mode: &ModeDescriptor) -> Image {
    let mut image = Image::zeros((mode.height * 2, mode.width, 3));

    for row in 0..mode.height {
        for col in 0..mode.width {
            let y1 = grid[[row, CHANNEL_Y1, col]];
            let cr = grid[[row, CHANNEL_CR, col]];
            let cb = grid[[row, CHANNEL_CB, col]];
            let y2 = grid[[row, CHANNEL_Y2, col]];

            let (r1, g1, b1) = ycbcr_to_rgb(y1, cb, cr);
            let (r2, g2, b2) = ycbcr_to_rgb(y2, cb, cr);

            image[[row * 2, col, 0]] = r1;
            image[[row * 2, col, 1]] = g1;
            image[[row * 2, col, 2]] = b1;
            image[[row * 2 + 1, col, 0]] = r2;
            image[[row * 2 + 1, col, 1]] = g2;
            image[[row * 2 + 1, col, 2]] = b2;
        }
    }

    image
}

/// BT.601-style full-range YCbCr to RGB, clamped to `0..=255`.
fn ycbcr_to_rgb(y: u8, cb: u8, cr: u8) -> (u8, u8, u8) {
    let y = y as f64;
    let cb = cb as f64 - 128.0;
    let cr = cr as f64 - 128.0;

    let r = y + 1.402 * cr;
    let g = y - 0.344_136 * cb - 0.714_136 * cr;
    let b = y + 1.772 * cb;

    (clamp_to_u8(r), clamp_to_u8(g), clamp_to_u8(b))
}

fn clamp_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
