//! Grid - Structure of Arrays (SoA) particle storage
//!
//! Instead of: Vec<Particle>             // one struct per cell
//! We have:    types[], life[], processed[]  // linear memory per field
//!
//! Row-major, index = x + y * width. y = 0 is the bottom row; gravity pulls
//! toward decreasing y. Dimensions are fixed at construction.

use crate::domain::materials::Material;

mod accessors;
mod indexing;
mod moves;
mod particle;
mod region;

pub use particle::Particle;
pub use region::Region;

/// SoA Grid - all particle data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) types: Vec<Material>,
    /// Remaining ticks for Fire/Smoke/Steam, 0 for everything else
    pub(crate) life: Vec<u16>,
    /// 0 = not processed, 1 = visited or moved into during the current scan
    pub(crate) processed: Vec<u8>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid must be at least 1x1, got {}x{}", width, height);
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            types: vec![Material::None; size],
            life: vec![0; size],
            processed: vec![0; size],
        }
    }
}

#[cfg(test)]
mod tests;
