use crate::systems::random::coin;

use super::update::update_cell;
use super::tick_stats::now_ms;
use super::{Simulation, TickStats};

/// One tick: every cell is considered once, rows bottom to top.
///
/// Markers are cleared first so a particle moved during this pass is not
/// visited again at its new position. The row direction is drawn once per
/// tick so neither side of the grid is favored over time.
pub(super) fn step(sim: &mut Simulation) {
    let started_ms = now_ms();
    let mut stats = TickStats::default();

    sim.grid.reset_processed();

    let left_to_right = coin(&mut sim.rng);
    stats.left_to_right = left_to_right;

    let width = sim.grid.width();
    let height = sim.grid.height();

    for y in 0..height {
        if left_to_right {
            for x in 0..width {
                update_cell(sim, x, y, &mut stats);
            }
        } else {
            for x in (0..width).rev() {
                update_cell(sim, x, y, &mut stats);
            }
        }
    }

    stats.finish(started_ms);
    sim.stats = stats;
    sim.frame += 1;
}
