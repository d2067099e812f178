//! Configuration types for loading scenario descriptions
//!
//! A scenario description is a small serde document listing initial body
//! states plus an optional gravitational constant:
//!
//! ```yaml
//! G: 1.0                       # optional, defaults to 1.0
//! bodies:
//!   - mass: 1000.0
//!     position: [400.0, 400.0]
//!     velocity: [0.0, 0.0]
//!   - mass: 1.0
//!     position: [400.0, 200.0]
//!     velocity: [0.0, 10.0]
//! ```
//!
//! Unknown fields are ignored. A missing required field, a position or
//! velocity that is not exactly two numbers, or a non-positive mass is a
//! hard [`ConfigError`]. JSON descriptions parse as well, YAML being a
//! superset

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Failure loading or validating a scenario description
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scenario {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("body {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f64 },
}

/// Initial state for a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub mass: f64,           // mass, must be positive
    pub position: [f64; 2],  // initial position in simulation units
    pub velocity: [f64; 2],  // initial velocity in simulation units per time unit
}

/// Top-level scenario description
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
    pub bodies: Vec<BodyConfig>, // bodies in source order
}

fn default_g() -> f64 {
    1.0
}

impl ScenarioConfig {
    /// Load and validate a scenario description from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (index, body) in self.bodies.iter().enumerate() {
            // Division by mass occurs in the force pass; `!(> 0)` also
            // rejects NaN
            if !(body.mass > 0.0) {
                return Err(ConfigError::NonPositiveMass {
                    index,
                    mass: body.mass,
                });
            }
        }
        Ok(())
    }
}
