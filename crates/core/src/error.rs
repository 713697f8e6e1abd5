//! Error types for AeroGame Core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid sample rate: {rate}")]
    InvalidSampleRate { rate: u32 },

    #[error("Audio too long for a WAV container: {samples} samples (max {max})")]
    ContainerOverflow { samples: usize, max: usize },

    #[error("Unsupported WAV format: {msg}")]
    UnsupportedFormat { msg: String },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

/// Result type for AeroGame Core operations
pub type Result<T> = std::result::Result<T, CoreError>;
