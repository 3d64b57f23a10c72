use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::ui::views::{ConversationView, HelpModal};
use crate::ui::widgets::{Footer, Header, InputBox};

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = app.current_theme();
        let size = frame.area();

        frame.render_widget(
            Block::default().style(
                Style::default()
                    .bg(theme.background())
                    .fg(theme.foreground()),
            ),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        Header::render(frame, chunks[0], app);
        ConversationView::render(frame, chunks[1], app);
        InputBox::render(frame, chunks[2], app);
        Footer::render(frame, chunks[3], app);

        if app.show_help {
            HelpModal::render(frame, size, app);
        }
    }
}
