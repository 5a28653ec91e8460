use super::*;

impl Grid {
    /// Relocate the particle at `(from_x, from_y)` into `(to_x, to_y)`.
    ///
    /// Succeeds only when the destination accepts moves (see
    /// [`Grid::accepts_moves_at`]) and is empty. On success the destination
    /// takes the source's material and lifetime and is marked processed; the
    /// source becomes an empty, processed cell. On failure nothing changes.
    pub fn try_move(&mut self, from_x: u32, from_y: u32, to_x: i32, to_y: i32) -> bool {
        if !self.accepts_moves_at(to_x, to_y) {
            return false;
        }
        let dst = self.index(to_x as u32, to_y as u32);
        if !self.types[dst].is_none() {
            return false;
        }
        let src = self.index(from_x, from_y);
        if src == dst {
            return false;
        }

        self.types[dst] = self.types[src];
        self.life[dst] = self.life[src];
        self.processed[dst] = 1;

        self.types[src] = Material::None;
        self.life[src] = 0;
        self.processed[src] = 1;
        true
    }
}
