use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Parser;
use lane_engine::{
    assign_with_options, date_range_label, layout_lanes, parse_snapshot, parse_timezone,
    Adjacency, AssignOptions, Event, FitStrategy,
};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Fit, Format};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let tz = parse_timezone(&cli.timezone)?;
    let raw = read_input(cli.input.as_deref())?;
    let events = parse_snapshot(&raw).context("failed to parse event snapshot")?;
    tracing::debug!(events = events.len(), "loaded snapshot");

    let options = AssignOptions {
        fit: match cli.fit {
            Fit::First => FitStrategy::FirstFit,
            Fit::Best => FitStrategy::BestFit,
        },
        adjacency: if cli.allow_touching {
            Adjacency::Touching
        } else {
            Adjacency::Strict
        },
    };
    let lanes = assign_with_options(events, &options);

    let output = match cli.format {
        Format::Json => serde_json::to_string_pretty(&lanes)?,
        Format::Layout => serde_json::to_string_pretty(&layout_lanes(&lanes))?,
        Format::Text => render_text(&lanes, &tz),
    };
    write_output(&mut io::stdout().lock(), &output).context("failed to write output")?;

    Ok(())
}

fn write_output<W: Write>(out: &mut W, output: &str) -> io::Result<()> {
    writeln!(out, "{output}")?;
    out.flush()
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn render_text(lanes: &[Vec<Event>], tz: &Tz) -> String {
    if lanes.is_empty() {
        return "No events".to_string();
    }
    lanes
        .iter()
        .enumerate()
        .map(|(index, lane)| {
            let entries: Vec<String> = lane
                .iter()
                .map(|event| format!("{} ({})", event.name, date_range_label(event, tz)))
                .collect();
            format!("Lane {}: {}", index + 1, entries.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
