use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::cli::output::checkbox;
use crate::tui::app::{App, Mode};
use crate::util::line_edit::LineEdit;
use crate::util::unicode::{display_width, tail_to_width, truncate_to_width};

/// Leading space plus `[ ] `
const PREFIX_WIDTH: usize = 5;

/// Render the filtered todo list
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    app.adjust_scroll(height);

    let visible = app.visible();
    if visible.is_empty() {
        let empty = Paragraph::new(" No todos").style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let editing = match (&app.mode, &app.edit) {
        (Mode::Edit, Some(session)) => Some(session),
        _ => None,
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, todo) in visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_cursor = i == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let box_style = if todo.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        let mut spans: Vec<Span> = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(checkbox(todo), box_style),
            Span::styled(" ", Style::default().bg(row_bg)),
        ];

        let title_width = width.saturating_sub(PREFIX_WIDTH + 1);
        match editing {
            Some(session) if session.id == todo.id => {
                push_edit_spans(&mut spans, app, &session.input, title_width, row_bg);
            }
            _ => {
                let mut title_style = if todo.completed {
                    Style::default()
                        .fg(app.theme.dim)
                        .bg(row_bg)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(app.theme.text_bright).bg(row_bg)
                };
                if is_cursor {
                    title_style = title_style.add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(
                    truncate_to_width(&todo.title, title_width),
                    title_style,
                ));
            }
        }

        // Fill the rest of the row so the selection bar spans the width
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The edit buffer in place of the title, with a block cursor. Long input
/// shows its tail so the cursor stays on screen.
fn push_edit_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    app: &App,
    input: &LineEdit,
    max_width: usize,
    row_bg: ratatui::style::Color,
) {
    let text_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(row_bg)
        .add_modifier(Modifier::UNDERLINED);
    let cursor_style = Style::default().fg(app.theme.highlight).bg(row_bg);

    let (before, after) = input.text().split_at(input.cursor());
    let before = tail_to_width(before, max_width.saturating_sub(1));
    let after = truncate_to_width(after, max_width.saturating_sub(display_width(before) + 1));

    spans.push(Span::styled(before.to_string(), text_style));
    spans.push(Span::styled("\u{258C}", cursor_style)); // ▌ cursor
    spans.push(Span::styled(after, text_style));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoFilter;
    use crate::tui::render::test_helpers::*;
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    fn render_list(app: &mut App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| render_list_view(frame, app, area))
    }

    #[test]
    fn empty_view_says_no_todos() {
        let mut app = app_with_titles(&[]);
        assert_eq!(render_list(&mut app, TERM_W, 5), " No todos");
    }

    #[test]
    fn empty_filtered_view_says_no_todos() {
        let mut app = app_with_titles(&["A"]);
        app.set_filter(TodoFilter::Completed);
        assert_eq!(render_list(&mut app, TERM_W, 5), " No todos");
    }

    #[test]
    fn rows_show_checkbox_and_title() {
        let mut app = app_with_titles(&["Buy milk", "Walk dog"]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(render_list(&mut app, TERM_W, 5), " [ ] Buy milk\n [x] Walk dog");
    }

    #[test]
    fn only_filtered_rows_are_drawn() {
        let mut app = app_with_titles(&["Buy milk", "Walk dog"]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(render_list(&mut app, TERM_W, 5), " [ ] Walk dog");
    }

    #[test]
    fn long_titles_are_truncated() {
        let mut app = app_with_titles(&["A very long title that does not fit"]);
        assert_eq!(render_list(&mut app, 20, 3), " [ ] A very long t\u{2026}");
    }

    #[test]
    fn edit_row_shows_buffer_and_cursor() {
        let mut app = app_with_titles(&["Buy milk", "Walk dog"]);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Left);
        assert_eq!(
            render_list(&mut app, TERM_W, 5),
            " [ ] Buy mil\u{258C}k\n [ ] Walk dog"
        );
    }

    #[test]
    fn list_scrolls_to_keep_cursor_visible() {
        let titles: Vec<String> = (1..=6).map(|i| format!("Task {}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(|s| s.as_str()).collect();
        let mut app = app_with_titles(&refs);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(
            render_list(&mut app, TERM_W, 3),
            " [ ] Task 4\n [ ] Task 5\n [ ] Task 6"
        );
        assert_eq!(app.scroll_offset, 3);
    }

    #[test]
    fn selected_row_has_selection_background() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let mut app = app_with_titles(&["A", "B"]);
        press(&mut app, KeyCode::Char('j'));
        let mut terminal = Terminal::new(TestBackend::new(TERM_W, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_list_view(frame, &mut app, area);
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(0, 1)].bg, app.theme.selection_bg);
        assert_eq!(buf[(TERM_W - 1, 1)].bg, app.theme.selection_bg);
        assert_eq!(buf[(0, 0)].bg, app.theme.background);
    }
}
