use rand::Rng;

use super::*;

/// Inclusive rectangle of cells, already clamped to the grid.
///
/// Empty when `x_min > x_max` or `y_min > y_max`, which happens when the
/// requested center lies far enough outside the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

impl Region {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Cells row by row, bottom to top, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        let (x_min, x_max) = (self.x_min, self.x_max);
        (self.y_min..=self.y_max).flat_map(move |y| (x_min..=x_max).map(move |x| (x, y)))
    }
}

impl Grid {
    /// Rectangle centered on `(cx, cy)` with half-extents `x_radius` and
    /// `y_radius`, clamped to `[0, width-1] x [0, height-1]`.
    pub fn clamp_region(&self, cx: u32, cy: u32, x_radius: u32, y_radius: u32) -> Region {
        Region {
            x_min: cx.saturating_sub(x_radius),
            y_min: cy.saturating_sub(y_radius),
            x_max: cx.saturating_add(x_radius).min(self.width - 1),
            y_max: cy.saturating_add(y_radius).min(self.height - 1),
        }
    }

    /// Fill every empty cell of the clamped region with `material`, each with
    /// its own freshly rolled lifetime. Occupied cells are never overwritten.
    /// Returns how many cells were filled.
    pub fn fill_region_where_empty<R: Rng + ?Sized>(
        &mut self,
        material: Material,
        cx: u32,
        cy: u32,
        x_radius: u32,
        y_radius: u32,
        rng: &mut R,
    ) -> u32 {
        let region = self.clamp_region(cx, cy, x_radius, y_radius);
        let mut filled = 0;
        for (x, y) in region.cells() {
            if self.is_empty(x, y) {
                self.assign(x, y, material, rng);
                filled += 1;
            }
        }
        filled
    }
}
