use super::{colors::hex_to_color, ColorPalette, Theme};

const PALETTE: ColorPalette = ColorPalette {
    background: hex_to_color(0x2e3440),
    foreground: hex_to_color(0xeceff4),
    foreground_dim: hex_to_color(0x4c566a),
    surface: hex_to_color(0x3b4252),
    border: hex_to_color(0x4c566a),
    selection: hex_to_color(0x434c5e),
    accent: hex_to_color(0x88c0d0),
    accent_secondary: hex_to_color(0x81a1c1),
    success: hex_to_color(0xa3be8c),
    warning: hex_to_color(0xebcb8b),
    error: hex_to_color(0xbf616a),
    info: hex_to_color(0x5e81ac),
};

pub struct Nord;

impl Theme for Nord {
    fn name(&self) -> &'static str {
        "Nord"
    }

    fn palette(&self) -> &ColorPalette {
        &PALETTE
    }
}
