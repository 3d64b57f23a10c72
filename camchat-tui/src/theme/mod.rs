mod colors;
mod dracula;
mod nord;
mod tokyo_night;

pub use colors::{hex_to_color, ColorPalette};
pub use dracula::Dracula;
pub use nord::Nord;
pub use tokyo_night::TokyoNight;

use camchat_core::MediaKind;
use ratatui::style::Color;

/// A named palette plus the chat-specific roles derived from it. Themes
/// only have to supply the palette; any role can be overridden.
pub trait Theme: Send + Sync {
    fn name(&self) -> &'static str;

    fn palette(&self) -> &ColorPalette;

    fn background(&self) -> Color {
        self.palette().background
    }

    fn foreground(&self) -> Color {
        self.palette().foreground
    }

    fn foreground_dim(&self) -> Color {
        self.palette().foreground_dim
    }

    fn surface(&self) -> Color {
        self.palette().surface
    }

    fn border(&self) -> Color {
        self.palette().border
    }

    fn selection(&self) -> Color {
        self.palette().selection
    }

    fn accent(&self) -> Color {
        self.palette().accent
    }

    fn success(&self) -> Color {
        self.palette().success
    }

    fn warning(&self) -> Color {
        self.palette().warning
    }

    fn error(&self) -> Color {
        self.palette().error
    }

    fn user_bubble(&self) -> Color {
        self.palette().accent
    }

    fn bot_bubble(&self) -> Color {
        self.palette().accent_secondary
    }

    fn media(&self, kind: MediaKind) -> Color {
        match kind {
            MediaKind::Video => self.palette().success,
            MediaKind::RtspStream => self.palette().warning,
            MediaKind::Link => self.palette().info,
        }
    }
}

pub struct ThemeManager {
    themes: Vec<Box<dyn Theme>>,
    current_index: usize,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes: Vec<Box<dyn Theme>> =
            vec![Box::new(TokyoNight), Box::new(Nord), Box::new(Dracula)];

        Self {
            themes,
            current_index: 0,
        }
    }

    /// Starts on `name` when it is known, on the first theme otherwise.
    pub fn with_theme(name: &str) -> Self {
        let mut manager = Self::new();
        if !manager.set_theme_by_name(name) {
            tracing::warn!("Unknown theme '{}', using {}", name, manager.current_theme_name());
        }
        manager
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.themes[self.current_index].as_ref()
    }

    pub fn cycle_theme(&mut self) {
        self.current_index = (self.current_index + 1) % self.themes.len();
    }

    pub fn set_theme_by_name(&mut self, name: &str) -> bool {
        match self
            .themes
            .iter()
            .position(|t| t.name().eq_ignore_ascii_case(name))
        {
            Some(index) => {
                self.current_index = index;
                true
            }
            None => false,
        }
    }

    pub fn available_themes(&self) -> Vec<&'static str> {
        self.themes.iter().map(|t| t.name()).collect()
    }

    pub fn current_theme_name(&self) -> &'static str {
        self.current_theme().name()
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
