use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::filter::TodoFilter;
use crate::model::todo::{Todo, TodoId};

use super::clock::{Clock, SystemClock};

/// Result of committing a title edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Title replaced with the trimmed text
    Renamed,
    /// Blank title: the todo was deleted
    Removed,
    /// No todo with that id
    NotFound,
}

/// The in-memory todo collection, newest first.
///
/// All mutation goes through `&mut self`. Operations are total: blank titles
/// and unknown ids are no-ops, never errors.
pub struct TodoStore {
    todos: Vec<Todo>,
    clock: Box<dyn Clock>,
    /// Latest timestamp handed out, so stamps never decrease even if the
    /// clock does.
    last_stamp: Option<DateTime<Utc>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        TodoStore {
            todos: Vec::new(),
            clock: Box::new(clock),
            last_stamp: None,
        }
    }

    /// Build a store from existing records. Later duplicates of an id are
    /// dropped, keeping the first occurrence.
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        let mut store = Self::new();
        let mut seen = HashSet::new();
        store.todos = todos.into_iter().filter(|t| seen.insert(t.id)).collect();
        store.last_stamp = store.todos.iter().map(|t| t.updated_at).max();
        store
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    /// The subsequence matching `filter`, in collection order
    pub fn view(&self, filter: TodoFilter) -> Vec<&Todo> {
        filtered_view(&self.todos, filter)
    }

    /// Number of todos not yet completed
    pub fn remaining(&self) -> usize {
        remaining_count(&self.todos)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Prepend a new active todo. Blank titles create nothing.
    pub fn add(&mut self, title: &str) -> Option<TodoId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let todo = Todo::new(title.to_string(), self.stamp());
        let id = todo.id;
        self.todos.insert(0, todo);
        Some(id)
    }

    /// Flip completion. Returns false when the id is unknown.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        let now = self.stamp();
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                todo.touch(now);
                true
            }
            None => false,
        }
    }

    /// Commit a title edit. A blank title deletes the todo.
    pub fn rename(&mut self, id: TodoId, new_title: &str) -> RenameOutcome {
        let title = new_title.trim();
        if title.is_empty() {
            return if self.remove(id) {
                RenameOutcome::Removed
            } else {
                RenameOutcome::NotFound
            };
        }
        let now = self.stamp();
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.title = title.to_string();
                todo.touch(now);
                RenameOutcome::Renamed
            }
            None => RenameOutcome::NotFound,
        }
    }

    /// Delete a todo. Returns false when the id is unknown.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    /// Drop every completed todo, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        before - self.todos.len()
    }

    fn stamp(&mut self) -> DateTime<Utc> {
        let now = self.clock.now();
        let stamp = match self.last_stamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// The todos matching `filter`, preserving collection order
pub fn filtered_view(todos: &[Todo], filter: TodoFilter) -> Vec<&Todo> {
    todos.iter().filter(|t| filter.matches(t)).collect()
}

/// Count of todos with `completed == false`
pub fn remaining_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| t.is_active()).count()
}
