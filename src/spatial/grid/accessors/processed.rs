use super::super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    // === Processed marker ===
    #[inline]
    pub fn is_processed(&self, x: u32, y: u32) -> bool {
        self.processed[self.index(x, y)] == 1
    }

    #[inline]
    pub fn set_processed(&mut self, x: u32, y: u32, p: bool) {
        let idx = self.index(x, y);
        self.processed[idx] = if p { 1 } else { 0 };
    }

    /// Clear every processed marker before a scan begins
    #[inline]
    pub fn reset_processed(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.processed.par_iter_mut().for_each(|v| *v = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.processed.fill(0);
        }
    }
}
