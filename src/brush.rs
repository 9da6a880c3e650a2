use egui::Color32;
use serde::{Deserialize, Serialize};

/// Device-independent units to rendering units.
///
/// One egui point is already one device-independent pixel, so the default
/// scale leaves sizes unchanged.
pub const DEFAULT_DP_SCALE: f32 = 1.0;

/// Convert a device-independent size into rendering units.
pub fn to_render_units(dp: f32, scale: f32) -> f32 {
    dp * scale
}

/// The three brush size presets offered by the size chooser.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    /// Size in device-independent units
    pub fn dp(self) -> f32 {
        match self {
            Self::Small => 10.0,
            Self::Medium => 20.0,
            Self::Large => 30.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// Paint attributes stamped onto the next stroke that is begun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    pub color: Color32,
    /// Thickness in rendering units
    pub thickness: f32,
}

impl BrushState {
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self { color, thickness }
    }
}

/// A palette swatch: display name plus the colour string forwarded to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub tag: &'static str,
}

const DEFAULT_SWATCHES: &[PaletteColor] = &[
    PaletteColor { name: "Black", tag: "#FF000000" },
    PaletteColor { name: "Red", tag: "#FFF44336" },
    PaletteColor { name: "Orange", tag: "#FFFF9800" },
    PaletteColor { name: "Yellow", tag: "#FFFFEB3B" },
    PaletteColor { name: "Green", tag: "#FF4CAF50" },
    PaletteColor { name: "Blue", tag: "#FF2196F3" },
    PaletteColor { name: "Purple", tag: "#FF9C27B0" },
    PaletteColor { name: "White", tag: "#FFFFFFFF" },
];

/// Fixed set of swatches with one of them marked as current.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<PaletteColor>,
    selected: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_SWATCHES.to_vec())
    }
}

impl Palette {
    pub fn new(colors: Vec<PaletteColor>) -> Self {
        Self { colors, selected: 0 }
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&PaletteColor> {
        self.colors.get(self.selected)
    }

    /// Mark `index` as current and return its swatch.
    ///
    /// Returns `None` when the index is out of range or already selected, in
    /// which case nothing changes.
    pub fn select(&mut self, index: usize) -> Option<&PaletteColor> {
        if index == self.selected || index >= self.colors.len() {
            return None;
        }
        self.selected = index;
        self.colors.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_color;

    #[test]
    fn presets_match_size_chooser() {
        let sizes: Vec<f32> = BrushSize::ALL.iter().map(|s| s.dp()).collect();
        assert_eq!(sizes, vec![10.0, 20.0, 30.0]);
        assert_eq!(BrushSize::default(), BrushSize::Medium);
    }

    #[test]
    fn scale_converts_dp() {
        assert_eq!(to_render_units(20.0, DEFAULT_DP_SCALE), 20.0);
        assert_eq!(to_render_units(20.0, 2.5), 50.0);
    }

    #[test]
    fn default_palette_tags_parse() {
        let palette = Palette::default();
        assert_eq!(palette.selected_index(), 0);
        for swatch in palette.colors() {
            assert!(parse_color(swatch.tag).is_ok(), "{} has a bad tag", swatch.name);
        }
        assert_eq!(parse_color(palette.selected().unwrap().tag).unwrap(), Color32::BLACK);
    }

    #[test]
    fn reselecting_current_swatch_is_ignored() {
        let mut palette = Palette::default();
        assert!(palette.select(0).is_none());

        let picked = palette.select(2).cloned();
        assert_eq!(picked.map(|c| c.name), Some("Orange"));
        assert_eq!(palette.selected_index(), 2);

        assert!(palette.select(2).is_none());
        assert!(palette.select(99).is_none());
        assert_eq!(palette.selected_index(), 2);
    }
}
