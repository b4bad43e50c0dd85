//! Series-description whitelist matching
//!
//! Free-text series descriptions vary in capitalization and incidental
//! whitespace between scanners. Labels are normalized to a canonical form
//! and compared by exact set membership, never by substring.

use std::collections::HashSet;

/// Canonical form of a series description: lowercase, leading/trailing
/// whitespace stripped, every inner whitespace run collapsed to one space.
///
/// Total and idempotent; an empty or absent label normalizes to `""`.
#[must_use]
pub fn normalize_series_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Immutable set of normalized canonical series names
#[derive(Debug, Clone)]
pub struct ProtocolWhitelist {
    names: HashSet<String>,
}

impl ProtocolWhitelist {
    /// Normalize each literal and collect into a set. Literals that collide
    /// after normalization collapse harmlessly.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| normalize_series_name(n.as_ref()))
                .collect(),
        }
    }

    /// Exact membership of the normalized label. An unrecognized or empty
    /// label is rejected.
    #[must_use]
    pub fn is_accepted(&self, series_description: &str) -> bool {
        self.names
            .contains(&normalize_series_name(series_description))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::T1_AXIAL_NAMES;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_series_name("  T1WI_3D_AX  "), "t1wi_3d_ax");
        assert_eq!(normalize_series_name("3D T1 TFE AX"), "3d t1 tfe ax");
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_series_name("t1   tra \t tirm\t3mm"), "t1 tra tirm 3mm");
    }

    #[test]
    fn test_normalize_empty_is_empty() {
        assert_eq!(normalize_series_name(""), "");
        assert_eq!(normalize_series_name("   \t "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["", "  A  B ", "t1wi_3d_ax", "3D  T1\tTFE AX ", "SÉRIE  t1"] {
            let once = normalize_series_name(s);
            assert_eq!(normalize_series_name(&once), once);
        }
    }

    #[test]
    fn test_whitelist_accepts_every_entry() {
        let whitelist = ProtocolWhitelist::new(T1_AXIAL_NAMES);
        for name in T1_AXIAL_NAMES {
            assert!(whitelist.is_accepted(name), "rejected {name}");
            assert!(whitelist.is_accepted(&name.to_uppercase()), "rejected {name} uppercased");
            assert!(whitelist.is_accepted(&format!("  {name}  ")), "rejected padded {name}");
        }
    }

    #[test]
    fn test_whitelist_rejects_supersets_and_variants() {
        let whitelist = ProtocolWhitelist::new(T1_AXIAL_NAMES);
        // no substring or prefix matching
        assert!(!whitelist.is_accepted("t1wi_3d_axial"));
        assert!(!whitelist.is_accepted("  t1wi_3d_ax   extra  words"));
        assert!(!whitelist.is_accepted("t2wi_3d_ax"));
        assert!(!whitelist.is_accepted(""));
    }

    #[test]
    fn test_whitelist_scenario_t1wi_3d_ax() {
        let whitelist = ProtocolWhitelist::new(["t1wi_3d_ax"]);
        assert!(whitelist.is_accepted(" T1WI_3D_AX  "));
        assert!(!whitelist.is_accepted("t1wi_3d_axial"));
    }

    #[test]
    fn test_whitelist_collapses_duplicates() {
        let whitelist = ProtocolWhitelist::new(["t1wi_3d_ax", "T1WI_3D_AX ", "t1wi_3d_ax"]);
        assert_eq!(whitelist.len(), 1);
        assert!(!whitelist.is_empty());
    }
}
