//! Generation configuration
//!
//! Settings can come from a JSON file, with CLI flags layered on top.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

/// Default grid width
pub const DEFAULT_COLUMNS: usize = 5;

/// Default grid height
pub const DEFAULT_ROWS: usize = 5;

/// Default number of layers
pub const DEFAULT_LAYERS: usize = 3;

/// Default number of path attempts
pub const DEFAULT_NUM_PATHS: usize = 1;

/// Parameters for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub columns: usize,
    pub rows: usize,
    pub layers: usize,
    pub num_paths: usize,
    /// Fixed seed for reproducible output; entropy when absent
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            layers: DEFAULT_LAYERS,
            num_paths: DEFAULT_NUM_PATHS,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(columns: usize, rows: usize, layers: usize, num_paths: usize) -> Self {
        Self {
            columns,
            rows,
            layers,
            num_paths,
            seed: None,
        }
    }

    /// Set a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: MazeConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check every dimension is usable for generation
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("columns", self.columns),
            ("rows", self.rows),
            ("layers", self.layers),
            ("num_paths", self.num_paths),
        ] {
            if value == 0 {
                return Err(MazeError::InvalidDimension {
                    reason: format!("{} must be at least 1", name),
                });
            }
        }
        let cells = self.columns.saturating_mul(self.rows);
        if self.num_paths > cells {
            return Err(MazeError::InvalidDimension {
                reason: format!(
                    "num_paths {} exceeds the {} cells available on layer 0",
                    self.num_paths, cells
                ),
            });
        }
        Ok(())
    }
}
