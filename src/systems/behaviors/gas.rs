//! GasBehavior - Smoke and Steam
//!
//! Gases are "inverted liquids": they burn down like fire and otherwise rise.
//! Rise straight up, then diagonally, then slide sideways. When boxed in, a
//! bubble search looks further up the column for an opening reachable through
//! permeable cells (fire, water, other gas) and jumps there.

mod r#move;
mod scan;

use super::{decay, Behavior, UpdateContext};

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if decay(ctx) {
            return;
        }
        if r#move::rise(ctx) {
            return;
        }
        if let Some((x, y)) = scan::bubble_target(ctx) {
            ctx.try_move_to(x as i32, y as i32);
        }
    }
}
