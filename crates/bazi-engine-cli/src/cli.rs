use std::path::PathBuf;

use bazi_engine::LocalZone;
use clap::{Parser, ValueEnum};

/// Compute a Four Pillars birth profile.
#[derive(Parser)]
#[command(name = "bazi", version, about = "Four Pillars birth profile calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Name of the person the profile is for.
    #[arg(long)]
    pub name: String,

    /// Birth date as YYYY-MM-DD.
    #[arg(long)]
    pub date: String,

    /// Birth time as HH:MM.
    #[arg(long)]
    pub time: String,

    /// UTC offset of the birth time as ±HH:MM. Without it the time is read in --zone.
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Focus area to include in the report. Repeat for several.
    #[arg(long = "focus", value_name = "AREA")]
    pub focus: Vec<String>,

    /// Zone standing in for local time: "system", an IANA name, or ±HH:MM.
    #[arg(long, default_value = "system", allow_hyphen_values = true)]
    pub zone: LocalZone,

    /// JSON file of precomputed calendar records keyed by YYYY-MM-DD.
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Milliseconds to wait for the calendar table to load.
    #[arg(long, default_value_t = 300)]
    pub grace_ms: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON profile.
    Json,
    /// Human-readable report.
    Text,
}
