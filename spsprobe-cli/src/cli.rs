use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "spsprobe",
    about = "List the NAL units of an H.264 Annex-B stream and decode its sequence parameter sets",
    version,
    author
)]
pub struct Args {
    /// Annex-B file to read, or `-` for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: PathBuf,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Drop the unit after the last start code instead of ending it at the end of input
    #[arg(long)]
    pub discard_trailing: bool,

    /// Parse SPS payloads as-is, without stripping emulation prevention bytes
    #[arg(long)]
    pub raw_sps: bool,

    /// Step over scaling list payloads instead of reading only their presence flags
    #[arg(long)]
    pub skip_scaling_lists: bool,

    /// Stop after this many NAL units
    #[arg(long)]
    pub max_units: Option<usize>,

    /// List every NAL unit, not only parameter sets and failures
    #[arg(short, long)]
    pub all_units: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Pretty-printed human-readable output
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// Compact JSON output
    JsonCompact,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::JsonCompact => write!(f, "json-compact"),
        }
    }
}
