use clap::Parser;
use std::path::PathBuf;

/// Export whitelisted T1-axial MR slices from a DICOM tree as grayscale PNGs
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root of the source DICOM tree, laid out as {patient}/{date}/{modality}/...
    #[arg(value_name = "SOURCE_ROOT")]
    pub source_root: PathBuf,

    /// Root for exported PNGs, written under {OUTPUT_ROOT}/ANAM/{patient}/{date}/
    #[arg(value_name = "OUTPUT_ROOT")]
    pub output_root: PathBuf,

    /// Log skip diagnostics per category
    #[arg(short, long)]
    pub verbose: bool,
}
