use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::filter::TodoFilter;
use crate::model::todo::Todo;
use crate::ops::todo_ops::TodoStore;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct TodoListJson {
    pub filter: TodoFilter,
    pub remaining: usize,
    pub total: usize,
    pub todos: Vec<TodoJson>,
}

pub fn todo_to_json(todo: &Todo) -> TodoJson {
    TodoJson {
        id: todo.id.to_string(),
        title: todo.title.clone(),
        completed: todo.completed,
        created_at: todo.created_at,
        updated_at: todo.updated_at,
    }
}

pub fn list_to_json(store: &TodoStore, filter: TodoFilter) -> TodoListJson {
    TodoListJson {
        filter,
        remaining: store.remaining(),
        total: store.len(),
        todos: store.view(filter).into_iter().map(todo_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Checkbox for a todo's state
pub fn checkbox(todo: &Todo) -> &'static str {
    if todo.completed { "[x]" } else { "[ ]" }
}

/// "1 item left" / "N items left"
pub fn remaining_label(remaining: usize) -> String {
    format!(
        "{} item{} left",
        remaining,
        if remaining == 1 { "" } else { "s" }
    )
}

/// Plain-text rendering of the filtered view plus the remaining count
pub fn format_list(store: &TodoStore, filter: TodoFilter) -> String {
    let view = store.view(filter);
    let mut out = String::new();
    if view.is_empty() {
        out.push_str("No todos\n");
    }
    for todo in view {
        out.push_str(checkbox(todo));
        out.push(' ');
        out.push_str(&todo.title);
        out.push('\n');
    }
    out.push_str(&remaining_label(store.remaining()));
    out.push('\n');
    out
}
