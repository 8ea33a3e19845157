use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Keys while typing a title (Add or Edit mode)
pub(super) fn handle_line_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => match app.mode {
            Mode::Add => app.commit_add(),
            Mode::Edit => app.commit_edit(),
            Mode::Navigate => {}
        },
        KeyCode::Esc => match app.mode {
            Mode::Add => app.cancel_add(),
            Mode::Edit => app.cancel_edit(),
            Mode::Navigate => {}
        },
        _ => {
            let Some(input) = app.active_input() else {
                return;
            };
            match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
                KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.move_home()
                }
                KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.move_end()
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    input.insert_char(c)
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_home(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
    }
}
