//! Simulation - owns the grid and the user's brush, runs ticks
//!
//! Per frame a host calls, in order:
//! - input setters + `process_input()` (paints while the brush is held)
//! - `update()`  one full scan of the grid
//! - `render()`  fills the RGBA pixel buffer
//!
//! Behaviors live in systems/behaviors, grid primitives in spatial/grid.
//! This module only orchestrates.

use crate::domain::config::SimulationConfig;
use crate::domain::legend::Legend;
use crate::domain::materials::Material;
use crate::grid::{Grid, Particle};
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::random::SimRng;

#[path = "perf/tick_stats.rs"]
mod tick_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/update.rs"]
mod update;
#[path = "commands/commands.rs"]
mod commands;
#[path = "input/input.rs"]
mod input;
#[path = "render/render.rs"]
mod render;
#[path = "init/init.rs"]
mod init;
mod facade;

pub use facade::World;
pub use tick_stats::TickStats;

/// The simulation core
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    behaviors: BehaviorRegistry,
    rng: SimRng,

    // Brush / cursor state, written by the input layer
    cursor_x: u32,
    cursor_y: u32,
    paint_held: bool,
    selected: Material,
    brush_size: u32,

    // State
    frame: u64,
    pixels: Vec<u32>,
    stats: TickStats,
}

impl Simulation {
    /// Create a simulation with default brush settings
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        init::create_simulation(SimulationConfig::new(width, height, seed))
    }

    /// Create from a validated config
    pub fn from_config(config: SimulationConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_simulation(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SimulationConfig::from_json(json)?;
        log::debug!("config loaded: {}", config.to_json());
        Self::from_config(config)
    }

    /// Create with an explicit generator; `config.seed` is ignored.
    pub fn with_rng(config: SimulationConfig, rng: SimRng) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_simulation_with_rng(config, rng))
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn config(&self) -> &SimulationConfig { &self.config }

    /// Read-only grid access for hosts and tests
    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn particle_count(&self) -> usize {
        self.grid.count_non_empty()
    }

    /// Stats of the last `update()`
    pub fn stats(&self) -> &TickStats { &self.stats }

    // === INPUT ===

    pub fn selected_material(&self) -> Material { self.selected }

    pub fn brush_size(&self) -> u32 { self.brush_size }

    pub fn cursor(&self) -> (u32, u32) { (self.cursor_x, self.cursor_y) }

    pub fn paint_held(&self) -> bool { self.paint_held }

    /// Number key 1..=6 selects Sand..Steam; other keys are ignored
    pub fn select_material_key(&mut self, key: u32) -> bool {
        input::select_material_key(self, key)
    }

    pub fn select_material(&mut self, material: Material) -> bool {
        input::select_material(self, material)
    }

    /// Grow/shrink the brush; sizes outside the configured range are refused
    pub fn scroll_brush(&mut self, delta: i32) -> bool {
        input::scroll_brush(self, delta)
    }

    pub fn set_brush_size(&mut self, size: u32) {
        input::set_brush_size(self, size)
    }

    pub fn reset_brush(&mut self) {
        input::reset_brush(self)
    }

    /// Cursor in grid coordinates (y up), clamped into the grid
    pub fn set_cursor(&mut self, x: u32, y: u32) {
        input::set_cursor(self, x, y)
    }

    /// Cursor from window coordinates (y down) drawn at `scale` pixels per cell
    pub fn set_cursor_from_screen(&mut self, sx: f64, sy: f64, screen_w: u32, screen_h: u32, scale: u32) -> bool {
        input::set_cursor_from_screen(self, sx, sy, screen_w, screen_h, scale)
    }

    pub fn set_paint_held(&mut self, held: bool) {
        self.paint_held = held;
    }

    /// Paint under the cursor if the brush is held. Returns cells filled.
    pub fn process_input(&mut self) -> u32 {
        input::process_input(self)
    }

    // === COMMANDS ===

    /// Place one particle with a fresh lifetime into an empty cell
    pub fn add_particle(&mut self, x: u32, y: u32, material: Material) -> bool {
        commands::add_particle(self, x, y, material)
    }

    /// Overwrite a cell with an exact particle state (scenarios, tools)
    pub fn set_particle(&mut self, x: u32, y: u32, particle: Particle) -> bool {
        commands::set_particle(self, x, y, particle)
    }

    /// Fill empty cells of the clamped rectangle around (cx, cy)
    pub fn paint(&mut self, cx: u32, cy: u32, radius: u32, material: Material) -> u32 {
        commands::paint(self, cx, cy, radius, material)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === STEP ===

    /// Advance one tick: a single full scan of the grid
    pub fn update(&mut self) {
        step::step(self);
    }

    /// `process_input` + `update` + `render`
    pub fn tick(&mut self) {
        self.process_input();
        self.update();
        self.render();
    }

    // === RENDER ===

    /// Refresh the owned pixel buffer from the grid
    pub fn render(&mut self) {
        render::render(self);
    }

    /// Shade into a caller-owned buffer of `width * height` texels
    pub fn render_into(&self, out: &mut [u32]) {
        render::render_into(self, out);
    }

    /// ABGR-packed texels, row-major, y = 0 first
    pub fn pixels(&self) -> &[u32] { &self.pixels }

    /// Pixel buffer as RGBA8 bytes
    pub fn rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }

    pub fn legend(&self) -> Legend {
        Legend::new(self.selected, self.brush_size, self.stats.step_ms())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
