//! Source-tree decomposition and output-path derivation
//!
//! The source tree is laid out as `{patient}/{date}/{modality}/...` below
//! the configured root. Entries that do not fit that shape are skipped by
//! the orchestrator, not treated as errors.

use crate::config::OUTPUT_SUBDIR;
use std::path::{Component, Path, PathBuf};

/// Candidate test: file name carries a `.dcm` extension, case-insensitively
#[must_use]
pub fn is_dicom_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("dcm"))
}

/// First three levels of a candidate's path relative to the source root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathKey {
    pub patient_code: String,
    pub date_folder: String,
    pub modality_folder: String,
}

impl PathKey {
    /// `None` when the relative path has fewer than three components or a
    /// non-UTF-8 one. A depth-3 entry yields the file name itself as the
    /// modality segment, which the modality check then rejects.
    #[must_use]
    pub fn from_relative(rel: &Path) -> Option<Self> {
        let mut parts = rel.components().map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        });

        let patient_code = parts.next()??.to_string();
        let date_folder = parts.next()??.to_string();
        let modality_folder = parts.next()??.to_string();

        Some(Self {
            patient_code,
            date_folder,
            modality_folder,
        })
    }

    #[inline]
    #[must_use]
    pub fn is_mr(&self) -> bool {
        self.modality_folder.eq_ignore_ascii_case("MR")
    }
}

/// `{output_root}/ANAM/{patient}/{date}`
#[must_use]
pub fn output_dir(output_root: &Path, key: &PathKey) -> PathBuf {
    output_root
        .join(OUTPUT_SUBDIR)
        .join(&key.patient_code)
        .join(&key.date_folder)
}

/// `{patient}_{date}_{modality}_{instance:03}.png`
#[must_use]
pub fn output_file_name(key: &PathKey, instance_number: i64) -> String {
    format!(
        "{patient}_{date}_{modality}_{instance:03}.png",
        patient = key.patient_code,
        date = key.date_folder,
        modality = key.modality_folder,
        instance = instance_number
    )
}
