use super::super::*;

impl Grid {
    #[inline]
    pub fn is_empty(&self, x: u32, y: u32) -> bool {
        self.material(x, y).is_none()
    }

    // === Material access ===
    #[inline]
    pub fn material(&self, x: u32, y: u32) -> Material {
        self.types[self.index(x, y)]
    }

    /// Material at signed coordinates; `None` when out of bounds.
    #[inline]
    pub fn material_at(&self, x: i32, y: i32) -> Option<Material> {
        if !self.in_bounds(x, y) { return None; }
        Some(self.types[self.index(x as u32, y as u32)])
    }

    // === Life access ===
    #[inline]
    pub fn lifetime(&self, x: u32, y: u32) -> u16 {
        self.life[self.index(x, y)]
    }

    #[inline]
    pub fn set_lifetime(&mut self, x: u32, y: u32, l: u16) {
        let idx = self.index(x, y);
        self.life[idx] = l;
    }

    // === Counting ===
    pub fn count(&self, material: Material) -> usize {
        self.types.iter().filter(|&&t| t == material).count()
    }

    pub fn count_non_empty(&self) -> usize {
        self.types.iter().filter(|t| !t.is_none()).count()
    }

    /// Read-only view of the material array (row-major).
    #[inline]
    pub fn materials(&self) -> &[Material] {
        &self.types
    }
}
