use clap::Parser;
use std::path::PathBuf;

/// Trainer configuration. Without flags the job reads its fixed dataset
/// name from the working directory and writes its fixed artifact name.
#[derive(Debug, Clone, Default, Parser)]
#[command(author, version, about = "Fit a gesture classifier from recorded landmarks", long_about = None)]
pub struct Args {
    /// Training CSV to read instead of the default dataset.
    #[arg(long)]
    pub csv: Option<PathBuf>,
    /// Artifact path to write instead of the default name.
    #[arg(long)]
    pub out: Option<PathBuf>,
}
