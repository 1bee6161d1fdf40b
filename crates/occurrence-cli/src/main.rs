//! `occurrences` CLI: expand and validate meeting definitions from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Expand a meeting definition (stdin → stdout), first 10 occurrences
//! cat meeting.json | occurrences expand
//!
//! # From a file, 25 occurrences starting at a reference instant
//! occurrences expand -i meeting.json --from 2026-06-01T00:00:00Z --limit 25
//!
//! # Drop occurrences whose wall-clock time falls in a DST gap
//! occurrences expand -i meeting.json --dst-policy skip
//!
//! # Strictly validate the rule and timezone
//! occurrences validate -i meeting.json
//!
//! # The next occurrence after now (or after --after)
//! occurrences next -i meeting.json
//! ```
//!
//! Set `RUST_LOG=debug` to see expansion diagnostics on stderr.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use occurrence_engine::{DstPolicy, MeetingAnchor, OccurrenceEngine};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "occurrences",
    version,
    about = "Expand recurring meeting definitions into concrete occurrences"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a meeting definition into its occurrences (JSON array)
    Expand {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Reference instant (RFC 3339); defaults to the meeting's start time
        #[arg(long)]
        from: Option<DateTime<Utc>>,
        /// Maximum number of occurrences to return
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// How to resolve wall-clock times that fall in a DST gap
        #[arg(long, value_enum, default_value_t = DstPolicyArg::ShiftForward)]
        dst_policy: DstPolicyArg,
        /// Print single-line JSON instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },
    /// Strictly validate a meeting definition's timezone and recurrence rule
    Validate {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the first occurrence at or after a given instant
    Next {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reference instant (RFC 3339); defaults to now
        #[arg(long)]
        after: Option<DateTime<Utc>>,
        /// How to resolve wall-clock times that fall in a DST gap
        #[arg(long, value_enum, default_value_t = DstPolicyArg::ShiftForward)]
        dst_policy: DstPolicyArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DstPolicyArg {
    ShiftForward,
    Skip,
}

impl From<DstPolicyArg> for DstPolicy {
    fn from(arg: DstPolicyArg) -> Self {
        match arg {
            DstPolicyArg::ShiftForward => DstPolicy::ShiftForward,
            DstPolicyArg::Skip => DstPolicy::Skip,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Expand {
            input,
            output,
            from,
            limit,
            dst_policy,
            compact,
        } => {
            let meeting = read_meeting(input.as_deref())?;
            let engine = OccurrenceEngine::with_dst_policy(dst_policy.into());
            let from = from.unwrap_or(meeting.start_time);

            let occurrences = engine.calculate_from(&meeting, from, limit);
            tracing::debug!(count = occurrences.len(), %from, limit, "expanded meeting");

            let json = if compact {
                serde_json::to_string(&occurrences)?
            } else {
                serde_json::to_string_pretty(&occurrences)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Validate { input } => {
            let meeting = read_meeting(input.as_deref())?;
            meeting
                .validate()
                .context("Meeting definition is invalid")?;
            println!("valid");
        }
        Commands::Next {
            input,
            after,
            dst_policy,
        } => {
            let meeting = read_meeting(input.as_deref())?;
            let engine = OccurrenceEngine::with_dst_policy(dst_policy.into());
            let after = after.unwrap_or_else(Utc::now);

            let next = engine.next_occurrence(&meeting, after);
            println!("{}", serde_json::to_string_pretty(&next)?);
        }
    }

    Ok(())
}

fn read_meeting(path: Option<&str>) -> Result<MeetingAnchor> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse meeting definition JSON")
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
            println!("{}", content);
        }
    }
    Ok(())
}
