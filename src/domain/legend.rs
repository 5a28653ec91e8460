//! Legend manifest for the host's text overlay
//!
//! The overlay draws "Sand(1)" .. "Steam(6)" in each material's color, the
//! brush size and the frame time. It only needs values, so the engine hands
//! it a serializable snapshot instead of drawing anything itself.

use serde::Serialize;

use super::materials::Material;
use super::palette::{material_color, unpack_rgba};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub key: u32,
    pub name: &'static str,
    /// RGBA bytes
    pub color: [u8; 4],
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub brush_size: u32,
    pub tick_ms: f64,
}

impl Legend {
    pub fn new(selected: Material, brush_size: u32, tick_ms: f64) -> Self {
        let entries = Material::PAINTABLE
            .iter()
            .enumerate()
            .map(|(i, &m)| LegendEntry {
                key: i as u32 + 1,
                name: m.name(),
                color: unpack_rgba(material_color(m)),
                selected: m == selected,
            })
            .collect();
        Self {
            entries,
            brush_size,
            tick_ms,
        }
    }

    /// Label as drawn by the overlay, e.g. "Fire(4)".
    pub fn label(entry: &LegendEntry) -> String {
        format!("{}({})", entry.name, entry.key)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
