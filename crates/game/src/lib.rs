//! AeroGame Game - the Morse guessing game around the encoder
//!
//! Word sources supply candidate secrets, a [`Session`] turns one of them
//! into a [`Challenge`] with rendered audio, and answers are checked by
//! exact, case-insensitive comparison.

pub mod words;
pub mod session;
pub mod error;

pub use error::{GameError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        words::{
            is_playable_word, parse_word_list, EnvWords, FallbackWords, StaticWords, WordSource,
            DEFAULT_WORDS, WORDS_ENV_VAR,
        },
        session::{Challenge, ChallengeId, Session, Verdict},
        error::{GameError, Result},
    };
}
