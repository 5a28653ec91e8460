use wasm_bindgen::prelude::*;

/// Milliseconds on a monotonic clock; only differences mean anything.
/// The browser has no `Instant`, so wasm reads `Date.now()`.
#[cfg(target_arch = "wasm32")]
pub(super) fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Counters for one `update()`. Rebuilt every tick.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    pub(super) step_ms: f64,
    pub(super) particles_processed: u32,
    pub(super) particles_moved: u32,
    pub(super) expired: u32,
    pub(super) ignitions: u32,
    pub(super) steam_conversions: u32,
    pub(super) left_to_right: bool,
}

impl TickStats {
    /// Stamp the scan time. `Date.now()` may step backwards, hence the floor.
    pub(super) fn finish(&mut self, started_ms: f64) {
        self.step_ms = (now_ms() - started_ms).max(0.0);
    }
}

#[wasm_bindgen]
impl TickStats {
    /// Wall time of the scan in milliseconds (the "MS/F" readout)
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    /// Non-empty cells visited, each at most once
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    /// Fire, Smoke and Steam cells whose lifetime ran out
    #[wasm_bindgen(getter)]
    pub fn expired(&self) -> u32 { self.expired }
    #[wasm_bindgen(getter)]
    pub fn ignitions(&self) -> u32 { self.ignitions }
    #[wasm_bindgen(getter)]
    pub fn steam_conversions(&self) -> u32 { self.steam_conversions }
    /// Row scan direction drawn for this tick
    #[wasm_bindgen(getter)]
    pub fn left_to_right(&self) -> bool { self.left_to_right }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_never_runs_backwards() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }

    #[test]
    fn finish_floors_at_zero() {
        let mut stats = TickStats::default();
        stats.finish(now_ms() + 1.0e9);
        assert_eq!(stats.step_ms(), 0.0);

        stats.finish(now_ms());
        assert!(stats.step_ms() >= 0.0);
    }
}
