//! LiquidBehavior - Water
//!
//! Same down/diagonal chain as powder, plus a one-cell sideways step when it
//! can't fall, which lets pools level out.

use super::{flow, Behavior, UpdateContext};

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        flow(ctx);
    }
}
