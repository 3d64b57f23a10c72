use super::{colors::hex_to_color, ColorPalette, Theme};

const PALETTE: ColorPalette = ColorPalette {
    background: hex_to_color(0x282a36),
    foreground: hex_to_color(0xf8f8f2),
    foreground_dim: hex_to_color(0x6272a4),
    surface: hex_to_color(0x343746),
    border: hex_to_color(0x44475a),
    selection: hex_to_color(0x44475a),
    accent: hex_to_color(0xbd93f9),
    accent_secondary: hex_to_color(0xff79c6),
    success: hex_to_color(0x50fa7b),
    warning: hex_to_color(0xf1fa8c),
    error: hex_to_color(0xff5555),
    info: hex_to_color(0x8be9fd),
};

pub struct Dracula;

impl Theme for Dracula {
    fn name(&self) -> &'static str {
        "Dracula"
    }

    fn palette(&self) -> &ColorPalette {
        &PALETTE
    }

    // Pink sits too close to the purple user bubbles.
    fn bot_bubble(&self) -> ratatui::style::Color {
        PALETTE.info
    }
}
