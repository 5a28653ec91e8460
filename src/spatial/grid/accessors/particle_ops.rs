use rand::Rng;

use super::super::*;

impl Grid {
    /// Whole-cell read. Panics outside the grid.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> Particle {
        let idx = self.index(x, y);
        Particle {
            material: self.types[idx],
            lifetime: self.life[idx],
            processed: self.processed[idx] == 1,
        }
    }

    /// Whole-cell write, marker included.
    pub fn set(&mut self, x: u32, y: u32, p: Particle) {
        let idx = self.index(x, y);
        self.types[idx] = p.material;
        self.life[idx] = if p.material.decays() { p.lifetime } else { 0 };
        self.processed[idx] = if p.processed { 1 } else { 0 };
    }

    /// Turn a cell into `material` with a freshly rolled lifetime.
    /// The processed marker is left alone.
    pub fn assign<R: Rng + ?Sized>(&mut self, x: u32, y: u32, material: Material, rng: &mut R) {
        let idx = self.index(x, y);
        self.types[idx] = material;
        self.life[idx] = material.roll_lifetime(rng);
    }

    // === Clear single cell ===
    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.types[idx] = Material::None;
        self.life[idx] = 0;
    }

    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.types.fill(Material::None);
        self.life.fill(0);
        self.processed.fill(0);
    }
}
