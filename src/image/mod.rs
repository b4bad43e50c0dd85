//! Grayscale image construction

mod normalization;

pub use normalization::{find_min_max, rescale_to_u8};

use anyhow::{Context, Result};
use image::{GrayImage, ImageBuffer};

/// Min-max rescale a raw sample plane and wrap it in an 8-bit grayscale
/// image of the same shape.
///
/// # Errors
///
/// Fails when the sample count does not match `rows * cols`.
pub fn to_gray_image(samples: &[f32], rows: u16, cols: u16) -> Result<GrayImage> {
    let pixels = rescale_to_u8(samples);

    ImageBuffer::from_raw(u32::from(cols), u32::from(rows), pixels)
        .context("Failed to create grayscale image buffer")
}
