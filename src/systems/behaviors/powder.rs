//! PowderBehavior - Sand
//!
//! Falls straight down, or rolls off diagonally when blocked. Never spreads
//! sideways on its own, so it piles up.

use super::{fall, Behavior, UpdateContext};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        fall(ctx);
    }
}
