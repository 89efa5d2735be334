//! JSON reading and writing for plans.

use std::{fs::File, io::{BufReader, BufWriter}, path::Path};

use anyhow::{Context, Result};

use crate::plan::Plan;

impl Plan {
    /// Write the plan (target plus per-district population and tracts) to a JSON file.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("[io::json::write] Failed to create JSON file: {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("[io::json::write] Failed to write plan to {:?}", path))
    }

    /// Read a plan previously written by [`Plan::write_json`].
    pub fn read_json(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[io::json::read] Failed to open JSON file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[io::json::read] Failed to parse plan from {:?}", path))
    }

    /// The plan as a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).context("[io::json::write] Failed to serialize plan")
    }
}
