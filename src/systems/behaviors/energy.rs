//! EnergyBehavior - Fire
//!
//! Each tick a fire cell:
//! 1. burns one tick of lifetime and goes out at zero,
//! 2. turns itself and water directly below into steam,
//! 3. otherwise rolls to ignite each wood cell in its 3x3 neighbourhood,
//!    puffing smoke above every cell that catches,
//! 4. and, if nothing caught, flows like water.

use super::{decay, flow, Behavior, UpdateContext};
use crate::domain::materials::Material;
use crate::systems::random::one_in;

/// Half-extents of the smoke puff spawned above a freshly ignited cell.
const SMOKE_PUFF_RADIUS: (u32, u32) = (3, 2);
/// The puff is centered this many rows above the ignited cell.
const SMOKE_PUFF_LIFT: u32 = 2;

pub struct EnergyBehavior;

impl EnergyBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Fire over water: both become steam with fresh lifetimes.
    #[inline]
    fn try_quench(&self, ctx: &mut UpdateContext) -> bool {
        let (x, y) = (ctx.x, ctx.y);
        if y == 0 || ctx.grid.material(x, y - 1) != Material::Water {
            return false;
        }
        ctx.grid.assign(x, y, Material::Steam, &mut *ctx.rng);
        ctx.grid.assign(x, y - 1, Material::Steam, &mut *ctx.rng);
        ctx.steam_conversions += 1;
        true
    }

    /// Roll once per wood neighbour. Returns true if anything caught.
    fn spread(&self, ctx: &mut UpdateContext) -> bool {
        let region = ctx.grid.clamp_region(ctx.x, ctx.y, 1, 1);
        let mut caught = false;
        for (i, j) in region.cells() {
            if ctx.grid.material(i, j) != Material::Wood {
                continue;
            }
            if !one_in(&mut *ctx.rng, ctx.ignition_one_in) {
                continue;
            }
            ctx.grid.assign(i, j, Material::Fire, &mut *ctx.rng);
            ctx.grid.fill_region_where_empty(
                Material::Smoke,
                i,
                j + SMOKE_PUFF_LIFT,
                SMOKE_PUFF_RADIUS.0,
                SMOKE_PUFF_RADIUS.1,
                &mut *ctx.rng,
            );
            ctx.ignitions += 1;
            caught = true;
        }
        caught
    }
}

impl Behavior for EnergyBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if decay(ctx) {
            return;
        }
        if self.try_quench(ctx) {
            return;
        }
        if !self.spread(ctx) {
            flow(ctx);
        }
    }
}
