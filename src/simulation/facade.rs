use wasm_bindgen::prelude::*;

use crate::domain::config::SimulationConfig;
use crate::domain::materials::{Material, MaterialId};

use super::{Simulation, TickStats};

/// JS-facing handle. Materials cross the boundary as `u8` ids (see `mat_*`).
#[wasm_bindgen]
pub struct World {
    core: Simulation,
}

impl World {
    fn build(core: Result<Simulation, String>) -> Result<World, JsValue> {
        core.map(|core| World { core })
            .map_err(|e| JsValue::from_str(&e))
    }

    /// The native core, for hosts that link the crate directly
    pub fn core(&self) -> &Simulation {
        &self.core
    }
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, seed: u64) -> Result<World, JsValue> {
        let config = SimulationConfig::new(width, height, seed);
        Self::build(Simulation::from_config(config))
    }

    /// Create from a JSON `SimulationConfig`; missing keys take defaults
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<World, JsValue> {
        Self::build(Simulation::from_config_json(&json))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === INPUT ===

    pub fn select_material_key(&mut self, key: u32) -> bool {
        self.core.select_material_key(key)
    }

    pub fn select_material(&mut self, id: MaterialId) -> bool {
        Material::from_id(id)
            .map(|m| self.core.select_material(m))
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn selected_material(&self) -> MaterialId {
        self.core.selected_material().id()
    }

    pub fn scroll_brush(&mut self, delta: i32) -> bool {
        self.core.scroll_brush(delta)
    }

    pub fn reset_brush(&mut self) {
        self.core.reset_brush();
    }

    #[wasm_bindgen(getter)]
    pub fn brush_size(&self) -> u32 { self.core.brush_size() }

    #[wasm_bindgen(setter)]
    pub fn set_brush_size(&mut self, size: u32) {
        self.core.set_brush_size(size);
    }

    pub fn set_cursor(&mut self, x: u32, y: u32) {
        self.core.set_cursor(x, y);
    }

    /// Mouse position in canvas pixels (y down)
    pub fn set_cursor_from_screen(&mut self, sx: f64, sy: f64, screen_w: u32, screen_h: u32, scale: u32) -> bool {
        self.core.set_cursor_from_screen(sx, sy, screen_w, screen_h, scale)
    }

    pub fn set_paint_held(&mut self, held: bool) {
        self.core.set_paint_held(held);
    }

    pub fn process_input(&mut self) -> u32 {
        self.core.process_input()
    }

    // === COMMANDS ===

    pub fn add_particle(&mut self, x: u32, y: u32, id: MaterialId) -> bool {
        match Material::from_id(id) {
            Some(material) => self.core.add_particle(x, y, material),
            None => false,
        }
    }

    /// Fill empty cells around (cx, cy)
    pub fn paint(&mut self, cx: u32, cy: u32, radius: u32, id: MaterialId) -> u32 {
        match Material::from_id(id) {
            Some(material) => self.core.paint(cx, cy, radius, material),
            None => 0,
        }
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === FRAME ===

    /// Step the simulation forward one tick
    pub fn update(&mut self) {
        self.core.update();
    }

    pub fn render(&mut self) {
        self.core.render();
    }

    /// Input, update and render in one call
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Stats of the last update
    pub fn get_tick_stats(&self) -> TickStats {
        self.core.stats().clone()
    }

    pub fn legend_json(&self) -> String {
        self.core.legend().to_json()
    }

    // === MEMORY VIEWS ===

    /// Pointer to the material array, one byte per cell
    pub fn types_ptr(&self) -> *const u8 {
        self.core.grid().materials().as_ptr() as *const u8
    }

    pub fn types_len(&self) -> usize {
        self.core.grid().size()
    }

    /// Pointer to the rendered texels; read as `Uint8ClampedArray` for RGBA
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels().as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels().len()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.core.pixels().len() * std::mem::size_of::<u32>()
    }
}
