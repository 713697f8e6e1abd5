//! Error types for AeroGame Codecs

use thiserror::Error;

/// Codec error types
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Invalid codec parameters: {msg}")]
    InvalidParameters { msg: String },

    #[error("Core error: {0}")]
    Core(#[from] aerogame_core::CoreError),
}

/// Result type for AeroGame Codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
