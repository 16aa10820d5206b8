use std::path::PathBuf;

use clap::Parser;

use crate::overrides::DEFAULT_OVERRIDES_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "sbom-notice",
    about = "Generate a third-party NOTICE file from a CycloneDX SBOM",
    version
)]
pub struct Cli {
    /// CycloneDX SBOM in JSON format
    #[arg(value_name = "SBOM")]
    pub sbom: PathBuf,

    /// Manually verified licenses for components the SBOM has none for
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OVERRIDES_PATH)]
    pub overrides: PathBuf,

    /// Output format
    #[arg(long, default_value = "notice", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// NOTICE text document
    Notice,
    /// Attribution records as JSON
    Json,
    /// Attribution records as a table
    Table,
}
