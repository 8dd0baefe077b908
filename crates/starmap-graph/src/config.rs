use crate::starfield::DEFAULT_STAR_COUNT;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use starmap_core::Viewport;
use std::fs;
use std::path::Path;

/// Tunables for one visual-model build. Missing fields in a config file take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub viewport: Viewport,
    pub star_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            star_count: DEFAULT_STAR_COUNT,
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
