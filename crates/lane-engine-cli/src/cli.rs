//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Assign calendar events to non-overlapping timeline lanes.
///
/// Reads a JSON array of `{id, name, start, end}` events and prints the lanes.
/// Instants are RFC 3339 datetimes or bare YYYY-MM-DD dates.
#[derive(Debug, Parser)]
#[command(name = "lanes", version, about, long_about = None)]
pub struct Cli {
    /// Snapshot file to read. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Lane selection strategy.
    #[arg(long, value_enum, default_value_t = Fit::First)]
    pub fit: Fit,

    /// Let an event start in the same lane at the instant the previous one ends.
    #[arg(long)]
    pub allow_touching: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// IANA timezone for date labels in text output.
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fit {
    /// Earliest-opened lane that fits.
    First,
    /// Lane whose last event ends latest while still fitting.
    Best,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Lanes of events as JSON.
    Json,
    /// Day offsets and spans per lane as JSON.
    Layout,
    /// One line per lane.
    Text,
}
