use egui::Color32;

use crate::error::{EngineError, EngineResult};

/// Named colours understood by [`parse_color`], as `0xAARRGGBB`.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF00_0000),
    ("darkgray", 0xFF44_4444),
    ("gray", 0xFF88_8888),
    ("lightgray", 0xFFCC_CCCC),
    ("white", 0xFFFF_FFFF),
    ("red", 0xFFFF_0000),
    ("green", 0xFF00_FF00),
    ("blue", 0xFF00_00FF),
    ("yellow", 0xFFFF_FF00),
    ("cyan", 0xFF00_FFFF),
    ("magenta", 0xFFFF_00FF),
    ("aqua", 0xFF00_FFFF),
    ("fuchsia", 0xFFFF_00FF),
    ("darkgrey", 0xFF44_4444),
    ("grey", 0xFF88_8888),
    ("lightgrey", 0xFFCC_CCCC),
    ("lime", 0xFF00_FF00),
    ("maroon", 0xFF80_0000),
    ("navy", 0xFF00_0080),
    ("olive", 0xFF80_8000),
    ("purple", 0xFF80_0080),
    ("silver", 0xFFC0_C0C0),
    ("teal", 0xFF00_8080),
];

/// Parse a colour string into a [`Color32`].
///
/// Accepts `#RRGGBB`, `#AARRGGBB` (alpha first) and a small set of
/// case-insensitive colour names such as `red` or `lightgray`.
pub fn parse_color(input: &str) -> EngineResult<Color32> {
    let invalid = || EngineError::InvalidColorFormat(input.to_owned());

    if let Some(hex) = input.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        return match hex.len() {
            6 => Ok(argb_to_color(0xFF00_0000 | value)),
            8 => Ok(argb_to_color(value)),
            _ => Err(invalid()),
        };
    }

    let name = input.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, argb)| argb_to_color(*argb))
        .ok_or_else(invalid)
}

fn argb_to_color(argb: u32) -> Color32 {
    let [a, r, g, b] = argb.to_be_bytes();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
