//! Particles Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - domain/      - Materials, palette, config, legend
//! - spatial/     - The cell grid and its primitives
//! - systems/     - Randomness and per-material behaviors
//! - simulation/  - Tick scheduling, input, rendering, JS facade

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use spatial::grid;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and browser console logging.
/// Safe to call more than once.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // Err only if a logger is already installed
        let _ = console_log::init_with_level(log::Level::Info);
    }

    log::info!("particles engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SimulationConfig;
pub use domain::materials::Material;
pub use simulation::{Simulation, TickStats, World};

// Material ids for JS
#[wasm_bindgen]
pub fn mat_none() -> u8 { domain::materials::MAT_NONE }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { domain::materials::MAT_SAND }
#[wasm_bindgen]
pub fn mat_water() -> u8 { domain::materials::MAT_WATER }
#[wasm_bindgen]
pub fn mat_wood() -> u8 { domain::materials::MAT_WOOD }
#[wasm_bindgen]
pub fn mat_fire() -> u8 { domain::materials::MAT_FIRE }
#[wasm_bindgen]
pub fn mat_smoke() -> u8 { domain::materials::MAT_SMOKE }
#[wasm_bindgen]
pub fn mat_steam() -> u8 { domain::materials::MAT_STEAM }
