use crate::domain::config::SimulationConfig;
use crate::domain::materials::Material;
use crate::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::random::{seeded, SimRng};

use super::Simulation;
use super::TickStats;

pub(super) fn create_simulation(config: SimulationConfig) -> Simulation {
    let rng = seeded(config.seed);
    create_simulation_with_rng(config, rng)
}

pub(super) fn create_simulation_with_rng(config: SimulationConfig, rng: SimRng) -> Simulation {
    let grid = Grid::new(config.width, config.height);
    let pixels = vec![0u32; grid.size()];
    log::debug!(
        "simulation created: {}x{} grid, seed {}",
        config.width,
        config.height,
        config.seed
    );

    Simulation {
        grid,
        behaviors: BehaviorRegistry::new(),
        rng,
        cursor_x: 0,
        cursor_y: 0,
        paint_held: false,
        selected: Material::Sand,
        brush_size: config.brush_default,
        frame: 0,
        pixels,
        stats: TickStats::default(),
        config,
    }
}
