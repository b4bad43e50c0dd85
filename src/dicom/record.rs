//! Decoded slice data

/// One decoded slice: the metadata the selection needs plus the raw
/// stored sample plane.
#[derive(Debug, Clone)]
pub struct SliceRecord {
    /// Modality tag value, trimmed; empty when absent
    pub modality: String,
    /// Series description (protocol label); empty when absent
    pub series_description: String,
    /// Instance number; 0 when absent or non-numeric
    pub instance_number: i64,
    pub rows: u16,
    pub cols: u16,
    /// Raw stored values, row-major, `rows * cols` long
    pub samples: Vec<f32>,
}

impl SliceRecord {
    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Tag-level modality check, case-insensitive
    #[inline]
    #[must_use]
    pub fn is_mr(&self) -> bool {
        self.modality.eq_ignore_ascii_case("MR")
    }
}
