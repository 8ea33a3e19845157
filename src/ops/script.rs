//! Line-oriented intent scripts for headless replay.
//!
//! ```text
//! # comments and blank lines are skipped
//! add Buy milk
//! toggle 1
//! filter completed
//! rename 1 Buy oat milk
//! remove 1
//! clear-completed
//! ```
//!
//! Row numbers are 1-based positions in the view selected by the most recent
//! `filter` line, the same rows a user sees on screen.

use tracing::warn;

use crate::model::filter::TodoFilter;
use crate::model::todo::TodoId;

use super::intent::{Intent, IntentOutcome};
use super::todo_ops::TodoStore;

/// Error type for script parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{verb}'")]
    UnknownVerb { line: usize, verb: String },
    #[error("line {line}: '{verb}' needs an argument")]
    MissingArgument { line: usize, verb: String },
    #[error("line {line}: invalid row number '{value}'")]
    InvalidRow { line: usize, value: String },
    #[error("line {line}: unknown filter '{value}'")]
    InvalidFilter { line: usize, value: String },
    #[error("line {line}: unexpected '{extra}' after '{verb}'")]
    TrailingInput {
        line: usize,
        verb: String,
        extra: String,
    },
}

/// One parsed script command, with rows still unresolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(String),
    Toggle(usize),
    Rename(usize, String),
    Remove(usize),
    ClearCompleted,
    Filter(TodoFilter),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based source line
    pub line: usize,
    pub command: ScriptCommand,
}

/// Parse a whole script. Fails on the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = parse_line(line, trimmed)?;
        lines.push(ScriptLine { line, command });
    }
    Ok(lines)
}

fn parse_line(line: usize, text: &str) -> Result<ScriptCommand, ScriptError> {
    let (verb, rest) = split_word(text);

    match verb {
        "add" => Ok(ScriptCommand::Add(rest.to_string())),
        "toggle" => {
            let (row, extra) = split_word(rest);
            no_trailing(line, verb, extra)?;
            Ok(ScriptCommand::Toggle(parse_row(line, verb, row)?))
        }
        "rename" => {
            let (row, title) = split_word(rest);
            Ok(ScriptCommand::Rename(parse_row(line, verb, row)?, title.to_string()))
        }
        "remove" | "delete" => {
            let (row, extra) = split_word(rest);
            no_trailing(line, verb, extra)?;
            Ok(ScriptCommand::Remove(parse_row(line, verb, row)?))
        }
        "clear-completed" | "clear" => {
            no_trailing(line, verb, rest)?;
            Ok(ScriptCommand::ClearCompleted)
        }
        "filter" => {
            let (name, extra) = split_word(rest);
            no_trailing(line, verb, extra)?;
            if name.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    verb: verb.to_string(),
                });
            }
            name.parse::<TodoFilter>()
                .map(ScriptCommand::Filter)
                .map_err(|_| ScriptError::InvalidFilter {
                    line,
                    value: name.to_string(),
                })
        }
        _ => Err(ScriptError::UnknownVerb {
            line,
            verb: verb.to_string(),
        }),
    }
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

/// Anything left after a command's last argument is an error
fn no_trailing(line: usize, verb: &str, extra: &str) -> Result<(), ScriptError> {
    if extra.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::TrailingInput {
            line,
            verb: verb.to_string(),
            extra: extra.to_string(),
        })
    }
}

/// Rows are 1-based; zero and non-numbers are rejected
fn parse_row(line: usize, verb: &str, value: &str) -> Result<usize, ScriptError> {
    if value.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            verb: verb.to_string(),
        });
    }
    value
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| ScriptError::InvalidRow {
            line,
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Apply parsed script lines to a store. `filter` tracks the view that row
/// numbers refer to and is left at whatever the script last selected.
pub fn replay(store: &mut TodoStore, filter: &mut TodoFilter, lines: &[ScriptLine]) {
    for ScriptLine { line, command } in lines {
        let intent = match command {
            ScriptCommand::Filter(f) => {
                *filter = *f;
                continue;
            }
            ScriptCommand::Add(title) => Intent::Add {
                title: title.clone(),
            },
            ScriptCommand::ClearCompleted => Intent::ClearCompleted,
            ScriptCommand::Toggle(row) => match resolve_row(store, *filter, *line, *row) {
                Some(id) => Intent::Toggle { id },
                None => continue,
            },
            ScriptCommand::Rename(row, title) => match resolve_row(store, *filter, *line, *row) {
                Some(id) => Intent::Rename {
                    id,
                    title: title.clone(),
                },
                None => continue,
            },
            ScriptCommand::Remove(row) => match resolve_row(store, *filter, *line, *row) {
                Some(id) => Intent::Remove { id },
                None => continue,
            },
        };
        if store.apply(intent) == IntentOutcome::Unchanged {
            warn!(line, "intent left the collection unchanged");
        }
    }
}

fn resolve_row(store: &TodoStore, filter: TodoFilter, line: usize, row: usize) -> Option<TodoId> {
    let id = store.view(filter).get(row - 1).map(|t| t.id);
    if id.is_none() {
        warn!(line, row, %filter, "row is past the end of the view, ignoring");
    }
    id
}
