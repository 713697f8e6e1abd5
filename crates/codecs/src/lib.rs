//! AeroGame Codecs - Morse code audio encoding
//!
//! This crate turns challenge text into keyed Morse audio: the character
//! table, the timing model, tone and silence synthesis, and an optional
//! per-message cache.

pub mod cw;
pub mod cache;
pub mod error;

pub use cw::{encode, EncodedAudio, TimingConfig};
pub use error::{CodecError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        cw::{
            encode, synthesize, segments, text_to_elements, expected_sample_count,
            EncodedAudio, MorseElement, MorseSymbol, MorseTable, Segment, SegmentKind,
            TimingConfig,
        },
        cache::CachedEncoder,
        error::{CodecError, Result},
    };
}
