use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TodoFilter;
use crate::tui::app::App;

/// Render the title and filter tabs, with a separator line below
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);

    let separator = Paragraph::new(Line::from(Span::styled(
        "\u{2500}".repeat(chunks[1].width as usize),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    )));
    frame.render_widget(separator, chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled("\u{25B6}", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            " Todos ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for filter in TodoFilter::ALL {
        spans.push(sep.clone());
        spans.push(Span::styled(
            format!(" {} ", filter.label()),
            tab_style(app, filter == app.filter),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)), area);
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;
    use ratatui::buffer::Buffer;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn filter_bar_text() {
        let app = app_with_titles(&[]);
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_filter_bar(frame, &app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " \u{25B6} Todos \u{2502} All \u{2502} Active \u{2502} Completed");
        assert_eq!(lines[1], "\u{2500}".repeat(TERM_W as usize));
    }

    fn render_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(TERM_W, 2)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_filter_bar(frame, app, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Column where a tab label starts in the first row
    fn label_col(buf: &Buffer, label: &str) -> u16 {
        let row: String = (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect::<Vec<_>>()
            .join("");
        let byte = row.find(label).unwrap();
        row[..byte].chars().count() as u16
    }

    #[test]
    fn current_filter_is_highlighted() {
        let mut app = app_with_titles(&[]);
        app.filter = TodoFilter::Active;
        let buf = render_buffer(&app);
        let active = label_col(&buf, "Active");
        let all = label_col(&buf, "All");
        assert_eq!(buf[(active, 0)].bg, app.theme.selection_bg);
        assert_eq!(buf[(all, 0)].bg, app.theme.background);
    }
}
