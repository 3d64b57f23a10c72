use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::Theme;

const BRAILLE: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const DOTS: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub struct Spinner {
    frames: &'static [&'static str],
}

impl Spinner {
    pub fn new() -> Self {
        Self { frames: BRAILLE }
    }

    pub fn dots() -> Self {
        Self { frames: DOTS }
    }

    pub fn frame(&self, tick: u64) -> &'static str {
        self.frames[(tick as usize) % self.frames.len()]
    }

    pub fn line(&self, tick: u64, message: &str, theme: &dyn Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                self.frame(tick),
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                message.to_string(),
                Style::default().fg(theme.foreground_dim()),
            ),
        ])
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}
