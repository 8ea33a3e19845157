use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::cli::output::remaining_label;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, tail_to_width, truncate_to_width};

const NAVIGATE_HINTS: &str = "a add  e edit  space toggle  d delete  C clear  ? help";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    // Counts stay on the right in every mode
    let total = format!("Total: {} ", app.store.len());
    let total_width = display_width(&total);
    let counts = || {
        Span::styled(
            format!(" {}", remaining_label(app.store.remaining())),
            Style::default().fg(app.theme.text).bg(bg),
        )
    };

    let mut spans = match app.mode {
        Mode::Navigate => {
            let mut spans = vec![counts()];
            if app.show_key_hints {
                push_hint(&mut spans, NAVIGATE_HINTS, total_width, width, app);
            }
            spans
        }
        Mode::Add => {
            // Add prompt: + title▌
            let prompt = " + ";
            let room = width.saturating_sub(display_width(prompt) + 1 + 1 + total_width);
            let input_style = Style::default().fg(app.theme.text_bright).bg(bg);
            let (before, after) = app.add_input.text().split_at(app.add_input.cursor());
            let before = tail_to_width(before, room);
            let after = truncate_to_width(after, room.saturating_sub(display_width(before)));
            let mut spans = vec![
                Span::styled(prompt, Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(before.to_string(), input_style),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
                Span::styled(after, input_style),
            ];
            push_hint(&mut spans, "Enter add  Esc done", total_width, width, app);
            spans
        }
        Mode::Edit => {
            let mut spans = vec![counts()];
            push_hint(&mut spans, "Enter save  Esc cancel", total_width, width, app);
            spans
        }
    };
    push_right(&mut spans, total, width, app);

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn content_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

/// Append a dim hint after the left content when it fits alongside
/// `reserve` cells on the right
fn push_hint(spans: &mut Vec<Span>, hint: &'static str, reserve: usize, width: usize, app: &App) {
    let bg = app.theme.background;
    if content_width(spans) + 2 + display_width(hint) + 2 + reserve <= width {
        spans.push(Span::styled("  ", Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }
}

/// Right-align `text` after the existing spans, if there is room
fn push_right(spans: &mut Vec<Span>, text: String, width: usize, app: &App) {
    let bg = app.theme.background;
    let used = content_width(spans);
    let text_width = display_width(&text);
    if used + text_width < width {
        let padding = width - used - text_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(text, Style::default().fg(app.theme.dim).bg(bg)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    fn render_status(app: &App, w: u16) -> String {
        render_to_string(w, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn navigate_shows_counts_and_hints() {
        let app = app_with_titles(&["A", "B"]);
        let output = render_status(&app, TERM_W);
        assert!(output.starts_with(" 2 items left  a add  e edit"));
        assert!(output.ends_with("Total: 2"));
    }

    #[test]
    fn singular_item_left() {
        let mut app = app_with_titles(&["A", "B"]);
        press(&mut app, KeyCode::Char(' '));
        assert!(render_status(&app, TERM_W).starts_with(" 1 item left"));
    }

    #[test]
    fn hints_dropped_when_narrow() {
        let app = app_with_titles(&["A"]);
        let output = render_status(&app, 40);
        assert!(!output.contains("a add"));
        assert!(output.starts_with(" 1 item left"));
        assert!(output.ends_with("Total: 1"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut app = app_with_titles(&[]);
        app.show_key_hints = false;
        let output = render_status(&app, TERM_W);
        assert!(!output.contains("a add"));
        assert!(output.starts_with(" 0 items left"));
    }

    #[test]
    fn add_mode_shows_prompt_and_total() {
        let mut app = app_with_titles(&["A", "B"]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Buy milk");
        let output = render_status(&app, TERM_W);
        assert!(output.starts_with(" + Buy milk\u{258C}  Enter add  Esc done"));
        assert!(output.ends_with("Total: 2"));
    }

    #[test]
    fn add_mode_total_follows_each_commit() {
        let mut app = app_with_titles(&[]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "One");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Two");
        press(&mut app, KeyCode::Enter);
        assert!(render_status(&app, TERM_W).ends_with("Total: 2"));
    }

    #[test]
    fn add_prompt_keeps_the_tail_of_long_input() {
        let mut app = app_with_titles(&[]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "0123456789abcdefghijklmnopqrst");
        // 40 wide: 3 prompt, 1 cursor, 1 gap, 9 total leaves 26
        let output = render_status(&app, 40);
        assert_eq!(output, " + 456789abcdefghijklmnopqrst\u{258C} Total: 0");
    }

    #[test]
    fn add_prompt_cursor_follows_left_arrow() {
        let mut app = app_with_titles(&[]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "milk");
        press(&mut app, KeyCode::Home);
        assert!(render_status(&app, TERM_W).starts_with(" + \u{258C}milk"));
    }

    #[test]
    fn edit_mode_keeps_counts() {
        let mut app = app_with_titles(&["A", "B"]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('e'));
        let output = render_status(&app, TERM_W);
        assert!(output.starts_with(" 1 item left  Enter save  Esc cancel"));
        assert!(output.ends_with("Total: 2"));
    }
}
