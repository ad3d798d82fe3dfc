//! Terminal rendering of core style values: colors, icons and pixel sizes.

use ratatui::style::Color;

use crate::core::theme::Rgb;
use crate::core::view::Icon;

/// Horizontal pixels per terminal cell when mapping layout sizes.
pub const PX_PER_CELL: u16 = 10;

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Pixel size to terminal columns, rounding up so small margins stay visible.
pub fn px_to_cells(px: u16) -> u16 {
    px.div_ceil(PX_PER_CELL)
}

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Edit => "✎",
        Icon::Save => "✔",
        Icon::Link => "↗",
        Icon::LinkLight => "⇗",
        Icon::Pin => "◇",
        Icon::PinFill => "◆",
        Icon::Settings => "⚙",
        Icon::Delete => "✖",
    }
}
