use tracing::debug;

use crate::model::todo::TodoId;

use super::todo_ops::{RenameOutcome, TodoStore};

/// A user intent against the todo collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add { title: String },
    Toggle { id: TodoId },
    /// Commit an edit; a blank title deletes
    Rename { id: TodoId, title: String },
    Remove { id: TodoId },
    ClearCompleted,
}

/// What applying an intent did to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    Added(TodoId),
    Toggled,
    Renamed,
    Removed,
    Cleared(usize),
    /// Blank title, unknown id, or nothing to clear
    Unchanged,
}

impl IntentOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, IntentOutcome::Unchanged | IntentOutcome::Cleared(0))
    }
}

impl TodoStore {
    /// Dispatch an intent to the matching store operation
    pub fn apply(&mut self, intent: Intent) -> IntentOutcome {
        let outcome = match &intent {
            Intent::Add { title } => match self.add(title) {
                Some(id) => IntentOutcome::Added(id),
                None => IntentOutcome::Unchanged,
            },
            Intent::Toggle { id } => {
                if self.toggle(*id) {
                    IntentOutcome::Toggled
                } else {
                    IntentOutcome::Unchanged
                }
            }
            Intent::Rename { id, title } => match self.rename(*id, title) {
                RenameOutcome::Renamed => IntentOutcome::Renamed,
                RenameOutcome::Removed => IntentOutcome::Removed,
                RenameOutcome::NotFound => IntentOutcome::Unchanged,
            },
            Intent::Remove { id } => {
                if self.remove(*id) {
                    IntentOutcome::Removed
                } else {
                    IntentOutcome::Unchanged
                }
            }
            Intent::ClearCompleted => IntentOutcome::Cleared(self.clear_completed()),
        };
        debug!(?intent, ?outcome, total = self.len(), "applied intent");
        outcome
    }
}
