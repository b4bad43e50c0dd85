//! Export configuration

use crate::protocol::ProtocolWhitelist;
use std::path::PathBuf;

/// Series descriptions of the T1-axial acquisitions selected for export
pub const T1_AXIAL_NAMES: [&str; 5] = [
    "t1_mprage_tra_p2_iso",
    "t1_tra tirm 3mm",
    "t1wi_3d_ax",
    "t1 ir tse fov 180",
    "3d t1 tfe ax",
];

/// Folder inserted between the output root and the per-patient tree
pub const OUTPUT_SUBDIR: &str = "ANAM";

/// Everything the export pass needs: the two roots and the protocol whitelist
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    pub protocols: ProtocolWhitelist,
}

impl ExportConfig {
    /// Config with the fixed T1-axial whitelist
    #[must_use]
    pub fn new(source_root: PathBuf, output_root: PathBuf) -> Self {
        Self {
            source_root,
            output_root,
            protocols: ProtocolWhitelist::new(T1_AXIAL_NAMES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_whitelist_has_five_entries() {
        let config = ExportConfig::new(PathBuf::from("/src"), PathBuf::from("/out"));
        assert_eq!(config.protocols.len(), 5);
    }
}
