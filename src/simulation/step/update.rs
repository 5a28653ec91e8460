use crate::systems::behaviors::UpdateContext;
use crate::systems::random::left_or_right;

use super::{Simulation, TickStats};

/// Update a single cell if it has not been handled this tick.
#[inline]
pub(super) fn update_cell(sim: &mut Simulation, x: u32, y: u32, stats: &mut TickStats) {
    if sim.grid.is_processed(x, y) {
        return;
    }
    sim.grid.set_processed(x, y, true);

    let material = sim.grid.material(x, y);
    if material.is_none() {
        return;
    }

    stats.particles_processed += 1;
    let bias = left_or_right(&mut sim.rng);

    let mut ctx = UpdateContext::new(
        &mut sim.grid,
        &mut sim.rng,
        x,
        y,
        bias,
        sim.config.ignition_one_in,
    );
    sim.behaviors.update(material, &mut ctx);

    stats.particles_moved += ctx.moved as u32;
    stats.expired += ctx.expired as u32;
    stats.ignitions += ctx.ignitions;
    stats.steam_conversions += ctx.steam_conversions;
}
