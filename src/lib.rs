pub mod cli;
pub mod config;
pub mod dicom;
pub mod export;
pub mod image;
pub mod paths;
pub mod protocol;

// Re-export commonly used items
pub use export::{ExportSummary, run_export};
