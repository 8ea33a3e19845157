use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::TodoFilter;
use crate::ops::intent::Intent;
use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        // Chords are not bindings here; Ctrl-C is handled before dispatch
        (m, _) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}

        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Movement
        (_, KeyCode::Char('j') | KeyCode::Down) => app.move_cursor(1),
        (_, KeyCode::Char('k') | KeyCode::Up) => app.move_cursor(-1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.visible().len().saturating_sub(1);
        }

        // Filter
        (_, KeyCode::Char('1')) => app.set_filter(TodoFilter::All),
        (_, KeyCode::Char('2')) => app.set_filter(TodoFilter::Active),
        (_, KeyCode::Char('3')) => app.set_filter(TodoFilter::Completed),
        (_, KeyCode::Tab) => app.set_filter(app.filter.next()),
        (_, KeyCode::BackTab) => app.set_filter(app.filter.prev()),

        // Intents
        (_, KeyCode::Char('a') | KeyCode::Char('n')) => app.start_add(),
        (_, KeyCode::Enter | KeyCode::Char('e')) => app.start_edit(),
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(id) = app.selected_id() {
                app.apply(Intent::Toggle { id });
            }
        }
        (_, KeyCode::Char('d') | KeyCode::Delete) => {
            if let Some(id) = app.selected_id() {
                app.apply(Intent::Remove { id });
            }
        }
        (_, KeyCode::Char('C')) => {
            app.apply(Intent::ClearCompleted);
        }
        _ => {}
    }
}
