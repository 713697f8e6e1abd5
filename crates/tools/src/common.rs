//! Common utilities shared by the CLI commands

use aerogame_codecs::TimingConfig;
use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Command-line overrides for the Morse timing
#[derive(Debug, Clone, Default, Args)]
pub struct TimingArgs {
    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Tone frequency in Hz
    #[arg(long)]
    pub tone_freq: Option<f64>,

    /// Dot length in milliseconds
    #[arg(long)]
    pub dot_ms: Option<u32>,

    /// Dash length in milliseconds
    #[arg(long)]
    pub dash_ms: Option<u32>,

    /// Gap after each dot or dash in milliseconds
    #[arg(long)]
    pub intra_ms: Option<u32>,

    /// Extra gap after each letter in milliseconds
    #[arg(long)]
    pub letter_ms: Option<u32>,

    /// Gap for a space in milliseconds
    #[arg(long)]
    pub word_ms: Option<u32>,
}

impl TimingArgs {
    /// Copy every given override onto `timing`
    pub fn apply(&self, timing: &mut TimingConfig) {
        if let Some(rate) = self.sample_rate {
            timing.sample_rate = rate;
        }
        if let Some(freq) = self.tone_freq {
            timing.tone_frequency = freq;
        }
        if let Some(ms) = self.dot_ms {
            timing.dot_ms = ms;
        }
        if let Some(ms) = self.dash_ms {
            timing.dash_ms = ms;
        }
        if let Some(ms) = self.intra_ms {
            timing.intra_symbol_gap_ms = ms;
        }
        if let Some(ms) = self.letter_ms {
            timing.letter_gap_ms = ms;
        }
        if let Some(ms) = self.word_ms {
            timing.word_gap_ms = ms;
        }
    }
}

/// Initialize logging; `debug` wins over `verbose`
pub fn init_logging(verbose: bool, debug: bool) {
    let log_level = if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration from file
pub fn load_config<T: for<'a> Deserialize<'a>>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;

    // Try JSON first, then TOML
    if let Ok(config) = serde_json::from_str(&content) {
        return Ok(config);
    }

    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("Failed to parse config file: {}", e),
    }
}

/// Save configuration to file, as JSON for `.json` paths and TOML otherwise
pub fn save_config<T: Serialize>(config: &T, path: &Path) -> Result<()> {
    let content = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_overrides() {
        let args = TimingArgs {
            sample_rate: Some(8000),
            dot_ms: Some(60),
            word_ms: Some(420),
            ..TimingArgs::default()
        };
        let mut timing = TimingConfig::default();
        args.apply(&mut timing);

        assert_eq!(timing.sample_rate, 8000);
        assert_eq!(timing.dot_ms, 60);
        assert_eq!(timing.word_gap_ms, 420);
        assert_eq!(timing.dash_ms, 360);
        assert_eq!(timing.tone_frequency, 800.0);
    }

    #[test]
    fn test_no_overrides() {
        let mut timing = TimingConfig::default();
        TimingArgs::default().apply(&mut timing);
        assert_eq!(timing, TimingConfig::default());
    }

    #[test]
    fn test_unparseable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "timing = [[[").unwrap();

        let result: Result<TimingConfig> = load_config(&path);
        assert!(result.is_err());
    }
}
