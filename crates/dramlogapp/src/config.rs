//! # Configuration
//!
//! Configuration lives in `dramlog.toml` inside the data directory and is
//! loaded with [`confique`], layered as:
//!
//! 1. **Environment variables**: `DRAMLOG_ABSORPTION_FACTOR`, `DRAMLOG_SLOT`.
//! 2. **Config file**: `<data-dir>/dramlog.toml`.
//! 3. **Compiled defaults** via `#[config(default = ...)]`.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `absorption_factor` | `0.8` | Factor applied to ml of ethanol (0.8 → grams) |
//! | `slot` | `drinks` | Name of the persistence slot |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::calc::DEFAULT_ABSORPTION_FACTOR;
use crate::error::Result;
use crate::store::DEFAULT_SLOT;

const CONFIG_FILENAME: &str = "dramlog.toml";

/// Configuration for dramlog, stored in `dramlog.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DramlogConfig {
    /// Fraction applied when deriving the pure-alcohol quantity from
    /// milliliters of ethanol. 0.8 yields grams, 1.0 yields plain ml.
    #[config(env = "DRAMLOG_ABSORPTION_FACTOR", default = 0.8)]
    pub absorption_factor: f64,

    /// Name of the persistence slot holding the drink collection.
    #[config(env = "DRAMLOG_SLOT", default = "drinks")]
    pub slot: String,
}

impl Default for DramlogConfig {
    fn default() -> Self {
        Self {
            absorption_factor: DEFAULT_ABSORPTION_FACTOR,
            slot: DEFAULT_SLOT.to_string(),
        }
    }
}

impl DramlogConfig {
    /// Load config for the given data directory. A missing file yields the
    /// defaults; environment variables override the file.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILENAME);
        let config = Self::builder().env().file(path).load()?;
        Ok(config)
    }

    /// The absorption factor, guarded to (0, 1]. Out-of-range values fall
    /// back to the default.
    pub fn absorption_factor(&self) -> f64 {
        if self.absorption_factor > 0.0 && self.absorption_factor <= 1.0 {
            self.absorption_factor
        } else {
            DEFAULT_ABSORPTION_FACTOR
        }
    }

    /// The slot name, defaulting when configured blank.
    pub fn slot(&self) -> &str {
        if self.slot.trim().is_empty() {
            DEFAULT_SLOT
        } else {
            &self.slot
        }
    }
}
