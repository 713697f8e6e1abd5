//! AeroGame Core - PCM sample buffers and WAV containers
//!
//! This crate holds the audio plumbing shared by the Morse encoder and
//! the CLI: an owned sample buffer tagged with its sample rate, and the
//! mono 16-bit PCM WAV writer/reader built on `hound`.

pub mod buffer;
pub mod wav;
pub mod error;

pub use error::{CoreError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        buffer::{SampleBuffer, PcmBuffer},
        wav::{write_wav, read_wav, MAX_PCM16_SAMPLES},
        error::{CoreError, Result},
    };
}
