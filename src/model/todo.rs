use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque todo identifier. Generated once at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// A fresh random id
    pub fn new() -> Self {
        TodoId(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(TodoId)
    }
}

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Trimmed, never empty
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Refreshed on toggle and rename; never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create an active todo stamped at `now`. The caller is responsible for
    /// passing an already-trimmed, non-empty title.
    pub fn new(title: String, now: DateTime<Utc>) -> Self {
        Todo {
            id: TodoId::new(),
            title,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Bump `updated_at` without ever moving it backwards
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}
