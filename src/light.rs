// Light-to-color mapping
//
// The catalog tags some spells with a categorical `light` attribute ("Blue",
// "Gold", ...). This module maps those keys to literal RGB triples for
// tinting the detail glyph and list markers. The mapping is a total pure
// function: unrecognized or absent keys fall back to black.

use ratatui::style::Color;

/// An RGB triple. Kept as raw components (rather than `ratatui::Color`
/// directly) so the mapping stays testable without terminal types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// The twelve recognized light keys and their display colors.
/// Kept in one table so the full set is visible at a glance.
pub const LIGHT_TABLE: [(&str, Rgb); 12] = [
    ("Blue", Rgb(0x15, 0x33, 0x9b)),
    ("IcyBlue", Rgb(0x6f, 0x93, 0xff)),
    ("BrightBlue", Rgb(0x00, 0x96, 0xff)),
    ("Red", Rgb(0xc4, 0x0b, 0x0b)),
    ("Gold", Rgb(0xec, 0xaa, 0x50)),
    ("Purple", Rgb(0x5f, 0x4e, 0xa8)),
    ("White", Rgb(0xff, 0xff, 0xff)),
    ("Green", Rgb(0x59, 0xc7, 0x2d)),
    ("Orange", Rgb(0xff, 0x94, 0x4e)),
    ("Pink", Rgb(0xe7, 0x4e, 0xff)),
    ("Yellow", Rgb(0xff, 0xdc, 0x4e)),
    ("Violet", Rgb(0xee, 0x82, 0xee)),
];

/// Fallback for unrecognized or absent keys.
pub const DEFAULT_RGB: Rgb = Rgb(0, 0, 0);

/// Map a light key to its display color. Total: never fails, anything
/// outside the table (including `None`) is black.
pub fn color_of(light: Option<&str>) -> Rgb {
    let Some(key) = light else {
        return DEFAULT_RGB;
    };
    LIGHT_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, rgb)| *rgb)
        .unwrap_or(DEFAULT_RGB)
}
