//! Run configuration.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::partition::FrontierOrder;

/// Target population per district in the reference Maryland run.
pub const DEFAULT_POPULATION_TARGET: u64 = 723_741;

/// Number of Maryland congressional districts.
pub const DEFAULT_DISTRICT_COUNT: u32 = 8;

/// Start tract of the reference Maryland run.
pub const DEFAULT_START_TRACT: &str = "24003751200";

/// Parameters shared by every growth round of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowConfig {
    /// Growth continues while a district's population is at or below this value.
    pub population_target: u64,
    /// Number of growth rounds (districts) per run.
    pub district_count: u32,
    /// Frontier traversal discipline.
    pub order: FrontierOrder,
    /// Seed for next-seed sampling; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for GrowConfig {
    fn default() -> Self {
        Self {
            population_target: DEFAULT_POPULATION_TARGET,
            district_count: DEFAULT_DISTRICT_COUNT,
            order: FrontierOrder::default(),
            seed: None,
        }
    }
}

impl GrowConfig {
    /// Read a configuration from a JSON file; missing fields take their defaults.
    pub fn read_json(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[config] Failed to open config file: {}", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[config] Failed to parse config from {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable partition.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.district_count >= 1, "[config] district_count must be at least 1");
        ensure!(self.population_target >= 1, "[config] population_target must be at least 1");
        Ok(())
    }
}
