//! Source-tree traversal and PNG export
//!
//! One synchronous pass over the source root. Each candidate file is
//! fully processed (decode, match, rescale, write) before the next is
//! considered; a per-file failure is logged and never aborts the run.

use crate::config::{ExportConfig, OUTPUT_SUBDIR};
use crate::dicom;
use crate::image::to_gray_image;
use crate::paths::{self, PathKey};
use anyhow::Result;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Per-file failure, keyed by pipeline stage
#[derive(Debug, Error)]
pub enum SliceError {
    #[error("DICOM read failed: {0}")]
    Read(String),
    #[error("image conversion failed: {0}")]
    Convert(String),
    #[error("PNG write failed: {0}")]
    Write(String),
}

/// Running totals for one export pass.
///
/// `candidates` counts every `.dcm` file seen, before any structural
/// check. The skip counters keep the silently skipped categories
/// observable without adding console noise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub candidates: u64,
    pub saved: u64,
    pub structural_skips: u64,
    pub modality_folder_skips: u64,
    pub modality_tag_skips: u64,
    pub protocol_skips: u64,
    pub decode_failures: u64,
    pub write_failures: u64,
}

/// Walk the source root and export every whitelisted T1-axial MR slice.
///
/// Prints a `[SAVE]` line per exported file and a `[SKIP]` line per
/// decode or write failure. Never fails once the walk has started;
/// unreadable directory entries are logged and passed over.
pub fn run_export(config: &ExportConfig) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    let mut candidates = Vec::new();
    for entry in WalkDir::new(&config.source_root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to traverse entry: {e}");
                continue;
            }
        };

        if entry.file_type().is_file() && paths::is_dicom_file(entry.path()) {
            candidates.push(entry.into_path());
        }
    }
    candidates.sort();

    for path in &candidates {
        summary.candidates += 1;
        process_candidate(path, config, &mut summary);
    }

    debug!(
        "skips: structural={structural}, modality_folder={folder}, modality_tag={tag}, protocol={protocol}, decode={decode}, write={write}",
        structural = summary.structural_skips,
        folder = summary.modality_folder_skips,
        tag = summary.modality_tag_skips,
        protocol = summary.protocol_skips,
        decode = summary.decode_failures,
        write = summary.write_failures,
    );

    Ok(summary)
}

/// Print the end-of-run report
pub fn print_summary(summary: &ExportSummary, config: &ExportConfig) {
    println!();
    println!("===== Done =====");
    println!("Total DICOM candidates : {}", summary.candidates);
    println!("T1-axial PNGs saved    : {}", summary.saved);
    println!(
        "Output root            : {}",
        config.output_root.join(OUTPUT_SUBDIR).display()
    );
}

enum Outcome {
    Saved(PathBuf),
    WrongModalityTag,
    ProtocolRejected,
}

fn process_candidate(path: &Path, config: &ExportConfig, summary: &mut ExportSummary) {
    let Ok(rel) = path.strip_prefix(&config.source_root) else {
        summary.structural_skips += 1;
        return;
    };

    let Some(key) = PathKey::from_relative(rel) else {
        debug!("Skipping {} (fewer than three path levels)", path.display());
        summary.structural_skips += 1;
        return;
    };

    // Folder-level modality filter; the tag is checked again after decode
    if !key.is_mr() {
        debug!(
            "Skipping {path} (modality folder {folder:?})",
            path = path.display(),
            folder = key.modality_folder
        );
        summary.modality_folder_skips += 1;
        return;
    }

    match process_slice(path, &key, config) {
        Ok(Outcome::Saved(dst)) => {
            summary.saved += 1;
            println!("[SAVE] {} -> {}", path.display(), dst.display());
        }
        Ok(Outcome::WrongModalityTag) => {
            debug!("Skipping {} (modality tag is not MR)", path.display());
            summary.modality_tag_skips += 1;
        }
        Ok(Outcome::ProtocolRejected) => {
            debug!("Skipping {} (series not whitelisted)", path.display());
            summary.protocol_skips += 1;
        }
        Err(e @ SliceError::Read(_)) => {
            summary.decode_failures += 1;
            println!("[SKIP] {} ({e})", path.display());
        }
        Err(e) => {
            summary.write_failures += 1;
            println!("[SKIP] {} ({e})", path.display());
        }
    }
}

fn process_slice(
    path: &Path,
    key: &PathKey,
    config: &ExportConfig,
) -> Result<Outcome, SliceError> {
    let obj = dicom::open_dicom_file(path).map_err(|e| SliceError::Read(format!("{e:#}")))?;
    let record = dicom::extract_slice(&obj).map_err(|e| SliceError::Read(format!("{e:#}")))?;

    if !record.is_mr() {
        return Ok(Outcome::WrongModalityTag);
    }

    if !config.protocols.is_accepted(&record.series_description) {
        return Ok(Outcome::ProtocolRejected);
    }

    let image = to_gray_image(&record.samples, record.rows, record.cols)
        .map_err(|e| SliceError::Convert(format!("{e:#}")))?;

    let out_dir = paths::output_dir(&config.output_root, key);
    fs::create_dir_all(&out_dir).map_err(|e| SliceError::Write(e.to_string()))?;

    let dst = out_dir.join(paths::output_file_name(key, record.instance_number));
    image.save(&dst).map_err(|e| SliceError::Write(e.to_string()))?;

    Ok(Outcome::Saved(dst))
}
