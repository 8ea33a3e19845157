use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::cli::commands::{Cli, Commands, ReplayArgs};
use crate::cli::output::{format_list, list_to_json};
use crate::io::logging::{LogTarget, init_logging};
use crate::model::filter::TodoFilter;
use crate::ops::script::{parse_script, replay};
use crate::ops::todo_ops::TodoStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match cli.command {
        None => {
            // The TUI owns the terminal; only log when asked to log to a file
            let target = match cli.log_file.as_deref() {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Off,
            };
            init_logging(target)?;
            crate::tui::run(cli.config.as_deref())
        }
        Some(Commands::Replay(args)) => {
            let target = match cli.log_file.as_deref() {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Stderr,
            };
            init_logging(target)?;
            cmd_replay(args, json)
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_replay(args: ReplayArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_script(args.file.as_deref())?;
    let (store, filter) = run_script(&text)?;
    let filter = args.filter.unwrap_or(filter);
    info!(total = store.len(), remaining = store.remaining(), %filter, "replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&list_to_json(&store, filter))?);
    } else {
        print!("{}", format_list(&store, filter));
    }
    Ok(())
}

fn read_script(file: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {}", path.display(), e).into()),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Parse and replay a script against a fresh store
pub fn run_script(text: &str) -> Result<(TodoStore, TodoFilter), crate::ops::script::ScriptError> {
    let lines = parse_script(text)?;
    let mut store = TodoStore::new();
    let mut filter = TodoFilter::All;
    replay(&mut store, &mut filter, &lines);
    Ok((store, filter))
}
