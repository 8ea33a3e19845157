use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::todo::Todo;

/// View selector over the todo collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    /// All filters in filter-bar order
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    /// Lowercase name used in scripts, config and JSON
    pub fn as_str(self) -> &'static str {
        match self {
            TodoFilter::All => "all",
            TodoFilter::Active => "active",
            TodoFilter::Completed => "completed",
        }
    }

    /// Capitalized label for the filter bar
    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => todo.is_active(),
            TodoFilter::Completed => todo.completed,
        }
    }

    /// Cycle forward: all → active → completed → all
    pub fn next(self) -> TodoFilter {
        match self {
            TodoFilter::All => TodoFilter::Active,
            TodoFilter::Active => TodoFilter::Completed,
            TodoFilter::Completed => TodoFilter::All,
        }
    }

    /// Cycle backward: all → completed → active → all
    pub fn prev(self) -> TodoFilter {
        match self {
            TodoFilter::All => TodoFilter::Completed,
            TodoFilter::Active => TodoFilter::All,
            TodoFilter::Completed => TodoFilter::Active,
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter: {0} (expected all, active or completed)")]
pub struct ParseFilterError(pub String);

impl FromStr for TodoFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TodoFilter::All),
            "active" => Ok(TodoFilter::Active),
            "completed" => Ok(TodoFilter::Completed),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}
