use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

const KEYBINDS: [(&str, &str); 6] = [
    ("Enter", "Send"),
    ("Tab", "Media"),
    ("^O", "Open"),
    ("^K", "Connect"),
    ("F1", "Help"),
    ("Esc", "Quit"),
];

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let keybind_spans: Vec<Span> = KEYBINDS
            .iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(
                        format!(" {key}"),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(":{desc} "),
                        Style::default().fg(theme.foreground_dim()),
                    ),
                ]
            })
            .collect();

        frame.render_widget(
            Paragraph::new(Line::from(keybind_spans)).style(Style::default().bg(theme.surface())),
            chunks[0],
        );

        let status = app.status_message.as_deref().unwrap_or("Ready");
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{status} "),
                Style::default().fg(theme.foreground_dim()),
            )))
            .alignment(Alignment::Right)
            .style(Style::default().bg(theme.surface())),
            chunks[1],
        );
    }
}
