//! Behaviors - per-material transition rules
//!
//! One behavior per material family, dispatched by the registry:
//! - powder: Sand falls straight or diagonally
//! - liquid: Water flows (falls, then spreads sideways)
//! - energy: Fire burns down, turns water to steam, ignites wood, otherwise flows
//! - gas:    Smoke and Steam burn down and float, bubbling up through permeable cells
//!
//! None and Wood have no behavior. Wood only changes when fire ignites it.

mod common;
mod energy;
mod gas;
mod liquid;
mod powder;

pub use common::{decay, fall, flow};
pub use energy::EnergyBehavior;
pub use gas::GasBehavior;
pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;

use crate::domain::materials::Material;
use crate::grid::Grid;
use crate::systems::random::SimRng;

/// Update context passed to behaviors, one per processed cell.
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut SimRng,
    pub x: u32,
    pub y: u32,
    /// -1 or +1, drawn fresh for this cell and tick
    pub left_or_right: i32,
    pub ignition_one_in: u32,

    // Outcome, read back by the scheduler for stats
    pub moved: bool,
    pub expired: bool,
    pub ignitions: u32,
    pub steam_conversions: u32,
}

impl<'a> UpdateContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        rng: &'a mut SimRng,
        x: u32,
        y: u32,
        left_or_right: i32,
        ignition_one_in: u32,
    ) -> Self {
        Self {
            grid,
            rng,
            x,
            y,
            left_or_right,
            ignition_one_in,
            moved: false,
            expired: false,
            ignitions: 0,
            steam_conversions: 0,
        }
    }

    /// Move this cell's particle by `(dx, dy)`.
    #[inline]
    pub fn try_move_by(&mut self, dx: i32, dy: i32) -> bool {
        let moved = self
            .grid
            .try_move(self.x, self.y, self.x as i32 + dx, self.y as i32 + dy);
        self.moved |= moved;
        moved
    }

    /// Move this cell's particle to an absolute position.
    #[inline]
    pub fn try_move_to(&mut self, x: i32, y: i32) -> bool {
        let moved = self.grid.try_move(self.x, self.y, x, y);
        self.moved |= moved;
        moved
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.grid.material(self.x, self.y)
    }
}

/// Behavior trait - each material family implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by material
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    energy: EnergyBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            energy: EnergyBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    /// Dispatch update to the behavior for `material`
    pub fn update(&self, material: Material, ctx: &mut UpdateContext) {
        match material {
            Material::Sand => self.powder.update(ctx),
            Material::Water => self.liquid.update(ctx),
            Material::Fire => self.energy.update(ctx),
            Material::Smoke | Material::Steam => self.gas.update(ctx),
            Material::None | Material::Wood => {}
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
