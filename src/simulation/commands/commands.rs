use crate::domain::materials::Material;
use crate::grid::Particle;

use super::Simulation;

pub(super) fn add_particle(sim: &mut Simulation, x: u32, y: u32, material: Material) -> bool {
    if x >= sim.grid.width() || y >= sim.grid.height() {
        return false;
    }
    if material.is_none() || !sim.grid.is_empty(x, y) {
        return false;
    }
    sim.grid.assign(x, y, material, &mut sim.rng);
    true
}

pub(super) fn set_particle(sim: &mut Simulation, x: u32, y: u32, particle: Particle) -> bool {
    if x >= sim.grid.width() || y >= sim.grid.height() {
        return false;
    }
    sim.grid.set(x, y, particle);
    true
}

/// Brush fill: the clamped square of half-size `radius` around the center.
/// A center outside the grid paints nothing.
pub(super) fn paint(sim: &mut Simulation, cx: u32, cy: u32, radius: u32, material: Material) -> u32 {
    if material.is_none() || cx >= sim.grid.width() || cy >= sim.grid.height() {
        return 0;
    }
    sim.grid
        .fill_region_where_empty(material, cx, cy, radius, radius, &mut sim.rng)
}

pub(super) fn clear(sim: &mut Simulation) {
    sim.grid.clear();
    sim.pixels.fill(0);
    log::debug!("simulation cleared at frame {}", sim.frame);
}
