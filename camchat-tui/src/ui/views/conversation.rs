use camchat_core::media::RTSP_IDLE_MESSAGE;
use camchat_core::{MediaItem, MediaKind, Message};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::{App, MediaRef};
use crate::theme::Theme;

const BUBBLE_BAR: &str = "│ ";
const PANEL_INDENT: usize = 4;

pub struct ConversationView;

impl ConversationView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(format!(" Conversation · {} ", app.session.thread_id()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.background()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 4 || inner.height == 0 {
            app.scroll_limit.set(0);
            return;
        }

        let content_width = inner.width.saturating_sub(1) as usize;
        let lines = conversation_lines(app, content_width);

        let height = inner.height as usize;
        let max_top = lines.len().saturating_sub(height);
        app.scroll_limit.set(u16::try_from(max_top).unwrap_or(u16::MAX));
        let top = max_top.saturating_sub(app.scroll_offset as usize);

        let paragraph =
            Paragraph::new(lines).scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));
        frame.render_widget(paragraph, inner);

        if max_top > 0 {
            let mut state = ScrollbarState::new(max_top).position(top);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None)
                    .style(Style::default().fg(theme.border())),
                inner,
                &mut state,
            );
        }
    }
}

/// Every rendered row of the conversation, already wrapped to `width`.
pub fn conversation_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = app.current_theme();
    let mut lines = Vec::new();

    for message in app.session.messages() {
        push_message(&mut lines, message, theme, width);

        for (index, item) in message.media().into_iter().enumerate() {
            let media_ref = MediaRef {
                message_id: message.id,
                index,
            };
            push_media_panel(&mut lines, app, media_ref, &item, width);
        }

        lines.push(Line::from(""));
    }

    lines
}

fn push_message(lines: &mut Vec<Line<'static>>, message: &Message, theme: &dyn Theme, width: usize) {
    let (name, color) = if message.is_user() {
        ("You", theme.user_bubble())
    } else {
        ("Assistant", theme.bot_bubble())
    };
    let time = message
        .sent_at
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string();

    lines.push(Line::from(vec![
        Span::styled(
            name.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", time),
            Style::default().fg(theme.foreground_dim()),
        ),
    ]));

    let text_width = width.saturating_sub(BUBBLE_BAR.chars().count());
    for row in wrap_text(&message.text, text_width) {
        lines.push(Line::from(vec![
            Span::styled(BUBBLE_BAR, Style::default().fg(color)),
            Span::styled(row, Style::default().fg(theme.foreground())),
        ]));
    }
}

fn push_media_panel(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    media_ref: MediaRef,
    item: &MediaItem,
    width: usize,
) {
    let theme = app.current_theme();
    let selected = app.selected_media == Some(media_ref);
    let base = if selected {
        Style::default().bg(theme.selection())
    } else {
        Style::default()
    };
    let kind_color = theme.media(item.kind);
    let marker = if selected { "▸ " } else { "  " };

    lines.push(Line::from(vec![
        Span::styled(marker, base.fg(theme.accent())),
        Span::styled(
            format!("{} {} ", item.kind.icon(), item.kind.label()),
            base.fg(kind_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(item.url.clone(), base.fg(theme.foreground())),
    ]));

    let indent = " ".repeat(PANEL_INDENT);
    let hint = |text: &str| {
        Line::from(Span::styled(
            format!("{}{}", indent, text),
            base.fg(theme.foreground_dim()),
        ))
    };

    match item.kind {
        MediaKind::Video => lines.push(hint("Ctrl-O open in player")),
        MediaKind::RtspStream => {
            let status = app
                .rtsp_panels
                .get(&media_ref)
                .map(|panel| panel.status_message())
                .unwrap_or(RTSP_IDLE_MESSAGE);
            for row in wrap_text(status, width.saturating_sub(PANEL_INDENT)) {
                lines.push(Line::from(Span::styled(
                    format!("{}{}", indent, row),
                    base.fg(theme.warning()),
                )));
            }
            lines.push(hint("Ctrl-K connect · Ctrl-O open externally"));
        }
        MediaKind::Link => {}
    }
}

/// Greedy word wrap. Explicit newlines are kept and words longer than
/// `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if current_len > 0 {
                    rows.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                rows.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed > width {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("the front door camera", 10),
            vec!["the front", "door", "camera"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(
            wrap_text("rtsp://10.0.0.2/live", 8),
            vec!["rtsp://1", "0.0.0.2/", "live"]
        );
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap_text("anything", 0), vec!["anything"]);
    }
}
