use serde::{Deserialize, Serialize};

use crate::brush::{BrushSize, Palette};

/// Key under which settings are stored in eframe storage
pub const SETTINGS_KEY: &str = "touch_painter_settings";

/// User choices restored between runs. Strokes are not persisted.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PainterSettings {
    pub brush_size: BrushSize,
    pub palette_index: usize,
}

impl PainterSettings {
    /// Load from eframe storage, falling back to defaults.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value::<Self>(storage, SETTINGS_KEY))
            .unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, self);
    }

    /// Drop a palette index that no longer points at a swatch.
    pub fn sanitized(mut self, palette: &Palette) -> Self {
        if self.palette_index >= palette.colors().len() {
            log::warn!("Stored palette index {} out of range, resetting", self.palette_index);
            self.palette_index = 0;
        }
        self
    }
}
