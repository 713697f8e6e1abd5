//! Error types for AeroGame Game

use thiserror::Error;

/// Game error types
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Word source returned no candidate words")]
    EmptyWordSource,

    #[error("None of the {rejected} candidate word(s) can be keyed in Morse")]
    NoPlayableWords { rejected: usize },

    #[error("No active challenge, start one first")]
    NoActiveChallenge,

    #[error("Codec error: {0}")]
    Codec(#[from] aerogame_codecs::CodecError),
}

/// Result type for AeroGame Game operations
pub type Result<T> = std::result::Result<T, GameError>;
