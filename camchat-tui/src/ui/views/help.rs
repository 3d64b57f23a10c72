use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

const KEYBINDS: [(&str, &str); 15] = [
    ("Enter", "Send the message"),
    ("Backspace", "Delete the last character"),
    ("Ctrl+U", "Clear the input"),
    ("Tab", "Select next media item"),
    ("Shift+Tab", "Select previous media item"),
    ("Ctrl+O", "Open selected media externally"),
    ("Ctrl+K", "Connect selected RTSP stream"),
    ("↑ / ↓", "Scroll one line"),
    ("PgUp / PgDn", "Scroll one page"),
    ("End", "Jump to the newest message"),
    ("Ctrl+R", "Check assistant health"),
    ("Ctrl+T", "Cycle theme"),
    ("F1", "Toggle this help"),
    ("Esc", "Close help / quit"),
    ("Ctrl+C", "Quit"),
];

pub struct HelpModal;

impl HelpModal {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let modal_area = centered_rect(area, 52, KEYBINDS.len() as u16 + 4);

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let mut lines: Vec<Line> = KEYBINDS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<13}", key),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, Style::default().fg(theme.foreground())),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  Theme: {}", app.theme_manager.current_theme_name()),
            Style::default().fg(theme.foreground_dim()),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
