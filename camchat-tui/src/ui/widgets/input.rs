use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Spinner;
use crate::app::App;

const PLACEHOLDER: &str = "Ask about your cameras...";

pub struct InputBox;

impl InputBox {
    /// Disabled while a request is in flight; shows a spinner instead of the
    /// text cursor.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let loading = app.is_loading();

        let border_color = if loading {
            theme.border()
        } else {
            theme.accent()
        };
        let block = Block::default()
            .title(" Message ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.background()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if loading {
            let line = Spinner::new().line(
                app.animation_tick,
                "Waiting for the assistant...",
                theme,
            );
            frame.render_widget(Paragraph::new(line), inner);
            return;
        }

        let input = app.session.input();
        if input.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    PLACEHOLDER,
                    Style::default().fg(theme.foreground_dim()),
                ))),
                inner,
            );
            frame.set_cursor_position(Position::new(inner.x, inner.y));
            return;
        }

        let visible = visible_tail(input, inner.width.saturating_sub(1) as usize);
        let cursor_x = inner.x + visible.chars().count() as u16;
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                visible.to_string(),
                Style::default().fg(theme.foreground()),
            ))),
            inner,
        );
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}

/// The last `width` characters of `text`, so the end being typed stays visible.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    match text.char_indices().nth(count - width) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("añb", 2), "ñb");
        assert_eq!(visible_tail("abc", 0), "");
    }
}
