//! `daygrid` CLI — compute day-view event layouts from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out one day's events (stdin → stdout)
//! echo '[{"id":"1","title":"Standup","start":"2026-03-01T09:00:00Z"}]' \
//!   | daygrid day --date 2026-03-01
//!
//! # Lay out a day from a file, viewed in another timezone
//! daygrid day --date 2025-02-21 --timezone America/Los_Angeles -i events.json
//!
//! # Lay out the whole Sunday-started week containing a date
//! daygrid week --date 2026-03-04 -i events.json -o week.json
//!
//! # Print the 24 hour gutter labels
//! daygrid hours
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use daygrid_engine::LayoutConfig;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "daygrid", version, about = "Day-view calendar event layout CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the `day` and `week` subcommands.
#[derive(Args)]
struct LayoutArgs {
    /// The viewed day, YYYY-MM-DD
    #[arg(long)]
    date: NaiveDate,

    /// IANA timezone to view the events in
    #[arg(long, default_value = "UTC")]
    timezone: String,

    /// Minimum event box height in minutes
    #[arg(long, default_value_t = 20)]
    min_height: i64,

    /// Input events JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

impl LayoutArgs {
    fn config(&self) -> LayoutConfig {
        LayoutConfig {
            timezone: self.timezone.clone(),
            min_event_height_minutes: self.min_height,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out one day's events
    Day(LayoutArgs),
    /// Lay out every day of the week containing the date
    Week(LayoutArgs),
    /// Print the 24 hour gutter labels
    Hours {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Day(args) => {
            let events = read_events(args.input.as_deref())?;
            let layout = daygrid_engine::layout_day(&events, args.date, &args.config())
                .context("Failed to lay out the day")?;
            write_json(args.output.as_deref(), &layout)?;
        }
        Commands::Week(args) => {
            let events = read_events(args.input.as_deref())?;
            let week = daygrid_engine::layout_week(&events, args.date, &args.config())
                .context("Failed to lay out the week")?;
            write_json(args.output.as_deref(), &week)?;
        }
        Commands::Hours { output } => {
            write_json(output.as_deref(), &daygrid_engine::hour_labels())?;
        }
    }

    Ok(())
}

/// Read and parse the events JSON array from a file or stdin.
fn read_events(path: Option<&str>) -> Result<Vec<daygrid_engine::Event>> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse events JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: serde::Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, pretty)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}
