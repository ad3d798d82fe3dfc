//! # Theme Styles
//!
//! Maps the active theme to the fixed color table used by the header.
//! The theme itself comes from context (config / CLI); the header only reads it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a theme name as found in env vars and config ("light" / "dark").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// A plain RGB triple. Kept free of any rendering crate so the style table
/// stays usable outside the terminal adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const GRAY: Rgb = Rgb(0x80, 0x80, 0x80);

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

const DARK_SURFACE: Rgb = Rgb(0x2e, 0x2e, 0x2e);
const DARK_RAISED: Rgb = Rgb(0x55, 0x55, 0x55);
const LIGHT_BORDER: Rgb = Rgb(0xd9, 0xd9, 0xd9);

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyles {
    pub background: Rgb,
    pub border_bottom: Rgb,
    pub input_background: Rgb,
    pub input_fg: Rgb,
    pub button_background: Rgb,
    pub button_fg: Rgb,
    /// Border of the Save / Cancel pair.
    pub button_border: Rgb,
    /// Dashed border of the Publish button (same in both themes).
    pub publish_border: Rgb,
}

pub fn styles(theme: Theme) -> ThemeStyles {
    match theme {
        Theme::Light => ThemeStyles {
            background: Rgb::WHITE,
            border_bottom: Rgb::GRAY,
            input_background: Rgb::WHITE,
            input_fg: Rgb::BLACK,
            button_background: Rgb::WHITE,
            button_fg: Rgb::BLACK,
            button_border: LIGHT_BORDER,
            publish_border: Rgb::GRAY,
        },
        Theme::Dark => ThemeStyles {
            background: DARK_SURFACE,
            border_bottom: DARK_RAISED,
            input_background: DARK_SURFACE,
            input_fg: Rgb::WHITE,
            button_background: DARK_RAISED,
            button_fg: Rgb::WHITE,
            button_border: DARK_RAISED,
            publish_border: Rgb::GRAY,
        },
    }
}
