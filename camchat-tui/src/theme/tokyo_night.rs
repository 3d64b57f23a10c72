use super::{colors::hex_to_color, ColorPalette, Theme};

const PALETTE: ColorPalette = ColorPalette {
    background: hex_to_color(0x1a1b26),
    foreground: hex_to_color(0xc0caf5),
    foreground_dim: hex_to_color(0x565f89),
    surface: hex_to_color(0x24283b),
    border: hex_to_color(0x414868),
    selection: hex_to_color(0x364a82),
    accent: hex_to_color(0x7aa2f7),
    accent_secondary: hex_to_color(0xbb9af7),
    success: hex_to_color(0x9ece6a),
    warning: hex_to_color(0xe0af68),
    error: hex_to_color(0xf7768e),
    info: hex_to_color(0x7dcfff),
};

pub struct TokyoNight;

impl Theme for TokyoNight {
    fn name(&self) -> &'static str {
        "Tokyo Night"
    }

    fn palette(&self) -> &ColorPalette {
        &PALETTE
    }
}
