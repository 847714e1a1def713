//! Configuration for the simulation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Simulation parameters
///
/// The defaults are the classic rule set; everything is exposed so a caller
/// can run a different world without recompiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Side length of the square grid
    pub grid_side: i32,
    /// Ants placed at startup
    pub initial_ants: usize,
    /// Doodlebugs placed at startup
    pub initial_doodlebugs: usize,
    /// Ticks between ant breed attempts
    pub ant_breed_threshold: u32,
    /// Ticks between doodlebug breed attempts
    pub doodlebug_breed_threshold: u32,
    /// Consecutive hunting failures before a doodlebug starves
    pub doodlebug_starve_threshold: u32,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_side: 20,
            initial_ants: 100,
            initial_doodlebugs: 5,
            ant_breed_threshold: 3,
            doodlebug_breed_threshold: 8,
            doodlebug_starve_threshold: 3,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Check that a world can actually be built from these parameters.
    pub fn validate(&self) -> Result<()> {
        if self.grid_side < 1 {
            return Err(Error::InvalidConfig(format!(
                "grid side must be at least 1, got {}",
                self.grid_side
            )));
        }
        let cells = (self.grid_side as usize) * (self.grid_side as usize);
        let population = self.initial_ants + self.initial_doodlebugs;
        if population > cells {
            return Err(Error::InvalidConfig(format!(
                "initial population {} does not fit a {}x{} grid",
                population, self.grid_side, self.grid_side
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let config: Self = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.grid_side, 20);
        assert_eq!(config.initial_ants, 100);
        assert_eq!(config.initial_doodlebugs, 5);
        assert_eq!(config.ant_breed_threshold, 3);
        assert_eq!(config.doodlebug_breed_threshold, 8);
        assert_eq!(config.doodlebug_starve_threshold, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_side() {
        let config = SimConfig {
            grid_side: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overfull_world() {
        let config = SimConfig {
            grid_side: 3,
            initial_ants: 8,
            initial_doodlebugs: 2,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        // Exactly full is still fine
        let config = SimConfig {
            grid_side: 3,
            initial_ants: 7,
            initial_doodlebugs: 2,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.grid_side, deserialized.grid_side);
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.initial_ants, deserialized.initial_ants);
    }
}
