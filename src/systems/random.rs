//! Seeded randomness
//!
//! Every random decision in a tick (scan order, left/right bias, ignition
//! rolls, lifetimes) is drawn from one `SimRng` owned by the simulation, so a
//! fixed seed replays the same run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub type SimRng = ChaCha8Rng;

pub fn seeded(seed: u64) -> SimRng {
    SimRng::seed_from_u64(seed)
}

/// Fair coin.
#[inline]
pub fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen::<bool>()
}

/// Horizontal bias for tie-breaks: -1 (left first) or +1 (right first).
#[inline]
pub fn left_or_right<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    if coin(rng) { -1 } else { 1 }
}

/// True with probability 1/n. `n == 1` always fires; `n == 0` never does.
#[inline]
pub fn one_in<R: Rng + ?Sized>(rng: &mut R, n: u32) -> bool {
    n > 0 && rng.gen_range(0..n) == 0
}
