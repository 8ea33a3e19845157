mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::handle_line_edit;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add | Mode::Edit => handle_line_edit(app, key),
    }
}

/// Handle a bracketed paste. Only meaningful while typing a title.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(input) = app.active_input() {
        input.insert_str(text);
    }
}

/// Some terminals report Shift+c as `Char('c')` with SHIFT set; fold that
/// into the uppercase character so bindings only need to match one form.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ctrl_c_quits_from_edit_mode() {
        let mut app = app_with_titles(&["A"]);
        app.start_edit();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_shift_letter_is_normalized() {
        let key = normalize_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('C'));
        let key = normalize_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('?'));
    }

    #[test]
    fn test_paste_goes_to_active_input_only() {
        let mut app = app_with_titles(&["A"]);
        handle_paste(&mut app, "ignored");
        assert_eq!(visible_titles(&app), vec!["A"]);

        press(&mut app, KeyCode::Char('a'));
        handle_paste(&mut app, "Pasted\ntitle");
        assert_eq!(app.add_input.text(), "Pasted title");
    }
}
