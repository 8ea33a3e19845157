use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::filter::TodoFilter;

#[derive(Parser)]
#[command(name = "td", about = concat!("[x] todolist v", env!("CARGO_PKG_VERSION"), " - a todo list that lives in memory"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read config from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write log output to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay an intent script and print the resulting list
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,
    /// View to print, overriding the script's last `filter` line
    #[arg(long, value_parser = parse_filter)]
    pub filter: Option<TodoFilter>,
}

fn parse_filter(s: &str) -> Result<TodoFilter, String> {
    s.parse::<TodoFilter>().map_err(|e| e.to_string())
}
