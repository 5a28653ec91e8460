use crate::domain::materials::Material;

use super::commands;
use super::Simulation;

pub(super) fn select_material_key(sim: &mut Simulation, key: u32) -> bool {
    match Material::from_key(key) {
        Some(material) => select_material(sim, material),
        None => false,
    }
}

/// Only paintable materials can be selected; None is refused.
pub(super) fn select_material(sim: &mut Simulation, material: Material) -> bool {
    if material.is_none() {
        return false;
    }
    sim.selected = material;
    true
}

/// One scroll notch changes the brush by `delta`. A result outside
/// `[brush_min, brush_max]` is ignored and the size stays put.
pub(super) fn scroll_brush(sim: &mut Simulation, delta: i32) -> bool {
    let next = sim.brush_size as i64 + delta as i64;
    let (min, max) = (sim.config.brush_min as i64, sim.config.brush_max as i64);
    if next < min || next > max {
        return false;
    }
    sim.brush_size = next as u32;
    true
}

pub(super) fn set_brush_size(sim: &mut Simulation, size: u32) {
    sim.brush_size = size.clamp(sim.config.brush_min, sim.config.brush_max);
}

pub(super) fn reset_brush(sim: &mut Simulation) {
    sim.brush_size = sim.config.brush_default;
}

pub(super) fn set_cursor(sim: &mut Simulation, x: u32, y: u32) {
    sim.cursor_x = x.min(sim.grid.width() - 1);
    sim.cursor_y = y.min(sim.grid.height() - 1);
}

/// Window pixels have y growing downward; grid rows grow upward. The
/// pointer is truncated to whole pixels before the flip. Positions off the
/// window leave the cursor unchanged; positions past the grid are clamped.
pub(super) fn set_cursor_from_screen(
    sim: &mut Simulation,
    sx: f64,
    sy: f64,
    screen_w: u32,
    screen_h: u32,
    scale: u32,
) -> bool {
    if scale == 0 || !sx.is_finite() || !sy.is_finite() {
        return false;
    }
    if sx < 0.0 || sy <= 0.0 || sx >= screen_w as f64 || sy > screen_h as f64 {
        return false;
    }
    let (px, py) = (sx as u32, sy as u32);
    let x = px / scale;
    let y = (screen_h - py) / scale;
    set_cursor(sim, x, y);
    true
}

pub(super) fn process_input(sim: &mut Simulation) -> u32 {
    if !sim.paint_held {
        return 0;
    }
    let (x, y, size, material) = (sim.cursor_x, sim.cursor_y, sim.brush_size, sim.selected);
    commands::paint(sim, x, y, size, material)
}
