use serde::{Deserialize, Serialize};

use crate::io::LoadMode;

/// Central configuration shared by callers of the crate.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MatrixConfig {
    pub load_mode: LoadMode,
    pub random: RandomFill,
}

/// Defaults for random initialization.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RandomFill {
    pub min: i32,
    pub max: i32,
    /// Seed for a reproducible generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RandomFill {
    fn default() -> Self {
        Self {
            min: 0,
            max: 9,
            seed: None,
        }
    }
}

impl MatrixConfig {
    pub fn new(load_mode: LoadMode, random: RandomFill) -> Self {
        Self { load_mode, random }
    }
}
