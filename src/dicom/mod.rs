//! DICOM file parsing and slice extraction
//!
//! The boundary to the external decoder: open a file, pull out the tags
//! the selection pipeline consumes, and decode the raw sample plane.
//! Consumed tags that may be absent have defined defaults; only missing
//! dimensions or undecodable pixel data are errors.

mod pixel_data;
mod record;

pub use record::SliceRecord;

use anyhow::{Context, Result};
use dicom::object::{FileDicomObject, InMemDicomObject, StandardDataDictionary, open_file};
use std::path::Path;

/// Open and parse a DICOM file
pub fn open_dicom_file(
    file_path: &Path,
) -> Result<FileDicomObject<InMemDicomObject<StandardDataDictionary>>> {
    open_file(file_path)
        .with_context(|| format!("Failed to open DICOM file: {}", file_path.display()))
}

/// Extract selection metadata and the raw sample plane from a DICOM object
pub fn extract_slice(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> Result<SliceRecord> {
    use dicom::dictionary_std::tags;

    let rows = obj
        .get(tags::ROWS)
        .and_then(|e| e.to_int::<u16>().ok())
        .context("Missing or invalid Rows tag")?;

    let cols = obj
        .get(tags::COLUMNS)
        .and_then(|e| e.to_int::<u16>().ok())
        .context("Missing or invalid Columns tag")?;

    // Only a single 2-D plane is exported
    let number_of_frames = obj
        .get(tags::NUMBER_OF_FRAMES)
        .and_then(|e| e.to_int::<u32>().ok())
        .unwrap_or(1);

    if number_of_frames > 1 {
        anyhow::bail!("Multi-frame object not supported ({number_of_frames} frames)");
    }

    let bits_allocated = obj
        .get(tags::BITS_ALLOCATED)
        .and_then(|e| e.to_int::<u16>().ok())
        .unwrap_or(16);

    let pixel_representation = obj
        .get(tags::PIXEL_REPRESENTATION)
        .and_then(|e| e.to_int::<u16>().ok())
        .unwrap_or(0);

    let modality = obj
        .get(tags::MODALITY)
        .and_then(|e| e.value().to_str().ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let series_description = obj
        .get(tags::SERIES_DESCRIPTION)
        .and_then(|e| e.value().to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_default();

    let instance_number = extract_instance_number(obj);

    let samples = pixel_data::extract_samples(obj, bits_allocated, pixel_representation)?;

    let record = SliceRecord {
        modality,
        series_description,
        instance_number,
        rows,
        cols,
        samples,
    };

    if record.samples.len() != record.pixel_count() {
        anyhow::bail!(
            "Pixel data length {len} does not match {cols}x{rows}",
            len = record.samples.len()
        );
    }

    Ok(record)
}

/// Instance number with best-effort parsing; absent or non-numeric is 0
fn extract_instance_number(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> i64 {
    use dicom::dictionary_std::tags;

    obj.get(tags::INSTANCE_NUMBER)
        .and_then(|e| {
            e.to_int::<i64>().ok().or_else(|| {
                e.value()
                    .to_str()
                    .ok()
                    .and_then(|s| s.trim().parse::<i64>().ok())
            })
        })
        .unwrap_or(0)
}
