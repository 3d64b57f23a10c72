use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Spinner;
use crate::app::{App, ConnectionStatus};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let base = Style::default().bg(theme.surface());

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(20),
                Constraint::Min(20),
                Constraint::Length(10),
            ])
            .split(area);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled(" ◉ ", Style::default().fg(theme.accent())),
            Span::styled(
                "camchat ",
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{}", VERSION),
                Style::default().fg(theme.foreground_dim()),
            ),
        ]))
        .style(base);
        frame.render_widget(logo, chunks[0]);

        let (icon, color) = match app.connection {
            ConnectionStatus::Online => (app.connection.icon(), theme.success()),
            ConnectionStatus::Offline => (app.connection.icon(), theme.error()),
            ConnectionStatus::Checking => (Spinner::dots().frame(app.animation_tick), theme.warning()),
            ConnectionStatus::Unknown => (app.connection.icon(), theme.foreground_dim()),
        };

        let status = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::styled(app.connection.label(), Style::default().fg(color)),
            Span::styled(
                format!("  {}", app.base_url),
                Style::default().fg(theme.foreground_dim()),
            ),
        ]))
        .alignment(Alignment::Center)
        .style(base);
        frame.render_widget(status, chunks[1]);

        let time = chrono::Local::now().format("%H:%M:%S ").to_string();
        let clock = Paragraph::new(Line::from(Span::styled(
            time,
            Style::default().fg(theme.foreground_dim()),
        )))
        .alignment(Alignment::Right)
        .style(base);
        frame.render_widget(clock, chunks[2]);
    }
}
