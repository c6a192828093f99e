//! `lineup` CLI — compute a conflict-free attendance timetable from a set of
//! overlapping, prioritized events.
//!
//! ## Usage
//!
//! ```sh
//! # Schedule events from a JSON file, print a human-readable plan
//! lineup schedule -i events.json
//!
//! # Schedule events piped via stdin, emit the plan as JSON
//! cat events.json | lineup schedule --format json
//!
//! # Write the plan to a file
//! lineup schedule -i events.json -o plan.json --format json
//!
//! # Run the built-in festival demo
//! lineup demo
//! ```
//!
//! Input is a JSON array of events, each with `start` and `end` (RFC 3339
//! timestamps), an integer `priority` (higher wins), and a `name`.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use lineup_engine::{generate_schedule, sort_by_priority, AttendanceSegment, Event};
use serde::Deserialize;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "lineup",
    version,
    about = "Conflict-free attendance timetabling for overlapping events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute an attendance plan from a JSON event list
    Schedule {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Compute the attendance plan for a built-in sample festival day
    Demo {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One line per segment: start, end, event name, duration
    Table,
    /// Pretty-printed JSON array of segments
    Json,
}

/// Raw event as it appears in the input JSON. Kept separate from the engine's
/// `Event` so every entry goes through `Event::new` validation.
#[derive(Deserialize)]
struct EventInput {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    priority: i32,
    name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule {
            input,
            output,
            format,
        } => {
            let json = read_input(input.as_deref())?;
            let mut events = parse_events(&json)?;

            // The engine requires priority-descending order; establish it here.
            sort_by_priority(&mut events);

            let schedule = generate_schedule(&events);
            write_output(output.as_deref(), &render(&schedule, format)?)?;
        }
        Commands::Demo { format } => {
            let mut events = demo_lineup()?;
            sort_by_priority(&mut events);

            let schedule = generate_schedule(&events);
            write_output(None, &render(&schedule, format)?)?;
        }
    }

    Ok(())
}

/// Parse and validate the input JSON event list.
fn parse_events(json: &str) -> Result<Vec<Event>> {
    let inputs: Vec<EventInput> =
        serde_json::from_str(json).context("Failed to parse input as a JSON event array")?;

    inputs
        .into_iter()
        .map(|e| {
            Event::new(e.start, e.end, e.priority, e.name)
                .context("Rejected malformed event in input")
        })
        .collect()
}

fn render(schedule: &[AttendanceSegment], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(schedule).context("Failed to serialize schedule")?;
            json.push('\n');
            Ok(json)
        }
        Format::Table => {
            if schedule.is_empty() {
                return Ok("(nothing to attend)\n".to_string());
            }
            let mut out = String::new();
            for seg in schedule {
                out.push_str(&format!(
                    "{}  ..  {}   {}   ({} min)\n",
                    seg.start.format("%Y-%m-%d %H:%M"),
                    seg.end.format("%Y-%m-%d %H:%M"),
                    seg.name,
                    seg.duration_minutes()
                ));
            }
            Ok(out)
        }
    }
}

/// The sample festival day: six performances with overlaps, a gap, and an
/// equal-priority clash.
fn demo_lineup() -> Result<Vec<Event>> {
    let day = |hour, min| {
        Utc.with_ymd_and_hms(2018, 1, 1, hour, min, 0)
            .single()
            .context("Invalid demo timestamp")
    };

    Ok(vec![
        Event::new(day(1, 0)?, day(2, 0)?, 9, "XTC")?,
        Event::new(day(3, 0)?, day(10, 0)?, 3, "Anderson Paak")?,
        Event::new(day(5, 0)?, day(6, 0)?, 8, "Slowdive")?,
        Event::new(day(6, 0)?, day(7, 0)?, 10, "MBV")?,
        Event::new(day(5, 30)?, day(6, 30)?, 1, "Linkin Park")?,
        Event::new(day(5, 45)?, day(6, 45)?, 10, "Sweet Trip")?,
    ])
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
