//! Simulation settings
//!
//! Every field has a default, so a host can send `{}` or only the keys it
//! cares about. Defaults match a 960x640 window drawn at 4x scale.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 240;
pub const DEFAULT_HEIGHT: u32 = 160;
pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_BRUSH_SIZE: u32 = 2;
pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 24;
/// Each wood neighbour of a fire cell ignites with probability 1/N per tick.
pub const DEFAULT_IGNITION_ONE_IN: u32 = 70;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub brush_default: u32,
    pub brush_min: u32,
    pub brush_max: u32,
    pub ignition_one_in: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED,
            brush_default: DEFAULT_BRUSH_SIZE,
            brush_min: MIN_BRUSH_SIZE,
            brush_max: MAX_BRUSH_SIZE,
            ignition_one_in: DEFAULT_IGNITION_ONE_IN,
        }
    }
}

impl SimulationConfig {
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimulationConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("grid must be at least 1x1, got {}x{}", self.width, self.height));
        }
        if (self.width as u64) * (self.height as u64) > u32::MAX as u64 {
            return Err(format!("grid {}x{} is too large", self.width, self.height));
        }
        if self.brush_min == 0 {
            return Err("brush_min must be at least 1".to_string());
        }
        if self.brush_min > self.brush_max {
            return Err(format!(
                "brush_min ({}) is larger than brush_max ({})",
                self.brush_min, self.brush_max
            ));
        }
        if !(self.brush_min..=self.brush_max).contains(&self.brush_default) {
            return Err(format!(
                "brush_default ({}) is outside {}..={}",
                self.brush_default, self.brush_min, self.brush_max
            ));
        }
        if self.ignition_one_in == 0 {
            return Err("ignition_one_in must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!((config.width, config.height), (240, 160));
        assert_eq!(config.brush_default, 2);
    }

    #[test]
    fn partial_json_overrides_only_given_keys() {
        let config = SimulationConfig::from_json(r#"{"width": 64, "seed": 9}"#).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn rejects_bad_brush_bounds() {
        let err = SimulationConfig::from_json(r#"{"brush_min": 5, "brush_max": 3}"#).unwrap_err();
        assert!(err.contains("brush_min"));
        let err = SimulationConfig::from_json(r#"{"brush_default": 30}"#).unwrap_err();
        assert!(err.contains("brush_default"));
    }

    #[test]
    fn rejects_empty_grid_and_malformed_json() {
        assert!(SimulationConfig::from_json(r#"{"width": 0}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"ignition_one_in": 0}"#).is_err());
        assert!(SimulationConfig::from_json("not json").is_err());
    }

    #[test]
    fn json_round_trips() {
        let config = SimulationConfig::new(32, 16, 4);
        assert_eq!(SimulationConfig::from_json(&config.to_json()), Ok(config));
    }
}
