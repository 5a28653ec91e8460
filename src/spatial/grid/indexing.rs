use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===

    /// Row-major index. Out-of-range coordinates are a caller bug and panic.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) is outside the {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (x as usize) + (y as usize) * (self.width as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Valid move destination: inside the grid and not on the x == 0 column or
    /// the y == 0 row. Those two edges never accept a moving particle.
    #[inline]
    pub fn accepts_moves_at(&self, x: i32, y: i32) -> bool {
        x >= 1 && y >= 1 && (x as u32) < self.width && (y as u32) < self.height
    }
}
