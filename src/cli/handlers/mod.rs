use std::path::Path;

use crate::cli::commands::{Cli, Commands, ListArgs};
use crate::cli::output::*;
use crate::dataset::{self, DatasetError};
use crate::model::Message;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let records = load_records(cli.data.as_deref())?;

    match cli.command {
        // No subcommand means the TUI; main routes that before we get here.
        None => Ok(()),
        Some(Commands::List(args)) => cmd_list(records, args, json),
        Some(Commands::Stats) => cmd_stats(records, json),
    }
}

/// The full dataset, from `--data` or the built-in wall. Subcommands list
/// everything; pagination is a TUI concern.
pub fn load_records(data: Option<&str>) -> Result<Vec<Message>, DatasetError> {
    match data {
        Some(path) => dataset::load(Path::new(path)),
        None => Ok(dataset::builtin()),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(
    mut records: Vec<Message>,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.sorted {
        records.sort_by_key(|m| m.date);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&wall_to_json(&records))?);
    } else {
        for line in format_wall_listing(&records) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_stats(records: Vec<Message>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(&records))?);
    } else {
        for line in format_stats(&records) {
            println!("{}", line);
        }
    }
    Ok(())
}
