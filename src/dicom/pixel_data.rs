//! Raw sample extraction from decoded pixel data

use anyhow::{Context, Result};
use dicom::object::{FileDicomObject, InMemDicomObject, StandardDataDictionary};
use dicom::pixeldata::PixelDecoder;

/// Decode the pixel data element and convert the stored values to f32.
///
/// Values are taken as stored, without modality LUT or windowing; the
/// export pipeline min-max rescales each slice on its own anyway.
/// 16-bit data with Pixel Representation 1 is read as i16.
pub fn extract_samples(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
    bits_allocated: u16,
    pixel_representation: u16,
) -> Result<Vec<f32>> {
    let decoded = obj
        .decode_pixel_data()
        .context("Failed to decode pixel data")?;

    // Raw little-endian bytes; avoids LUT application on 16-bit data
    let bytes = decoded.data();

    match bits_allocated {
        8 => Ok(bytes.iter().map(|&b| f32::from(b)).collect()),
        16 => {
            if !bytes.len().is_multiple_of(2) {
                anyhow::bail!("Invalid 16-bit pixel data length");
            }

            if pixel_representation == 1 {
                Ok(bytes
                    .chunks_exact(2)
                    .map(|chunk| f32::from(i16::from_le_bytes([chunk[0], chunk[1]])))
                    .collect())
            } else {
                Ok(bytes
                    .chunks_exact(2)
                    .map(|chunk| f32::from(u16::from_le_bytes([chunk[0], chunk[1]])))
                    .collect())
            }
        }
        other => anyhow::bail!("Unsupported bits allocated for export: {other}"),
    }
}
