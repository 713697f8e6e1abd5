//! Configuration management for the AeroGame CLI

use aerogame_codecs::TimingConfig;
use aerogame_game::words::{EnvWords, FallbackWords, StaticWords};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::common::{load_config, save_config};

/// Game configuration, loadable from TOML or JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Secret word candidates; empty means environment or built-in words
    pub words: Vec<String>,

    /// Shown with every correct answer
    pub reward_code: Option<String>,

    /// Where challenge audio is written
    pub output: PathBuf,

    /// Morse timing and tone
    pub timing: TimingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            reward_code: None,
            output: PathBuf::from("challenge.wav"),
            timing: TimingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML or JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Self = load_config(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        config
            .timing
            .validate()
            .with_context(|| format!("Invalid timing in {:?}", path))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        save_config(self, path)
            .with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Configured words first, then `AEROGAME_WORDS`, then the built-in list
    pub fn word_source(&self) -> FallbackWords<StaticWords, EnvWords> {
        FallbackWords::new(StaticWords::new(self.words.clone()), EnvWords::default())
    }
}
