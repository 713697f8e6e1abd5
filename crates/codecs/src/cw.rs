//! CW (Morse Code) audio encoding
//!
//! Turns a text message into a mono 16-bit PCM WAV file. Letters and
//! digits are keyed as sine tones, everything else except the space is
//! dropped without a trace in the output.

use crate::{CodecError, Result};
use aerogame_core::{buffer::PcmBuffer, wav};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Peak level of a keyed tone, as a fraction of i16 full scale.
pub const TONE_AMPLITUDE: f64 = 0.5;

/// Morse code timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Tone frequency in Hz
    pub tone_frequency: f64,

    /// Dot length (milliseconds)
    pub dot_ms: u32,

    /// Dash length (milliseconds)
    pub dash_ms: u32,

    /// Silence after every dot or dash (milliseconds)
    pub intra_symbol_gap_ms: u32,

    /// Extra silence after the last symbol of a letter (milliseconds)
    pub letter_gap_ms: u32,

    /// Silence emitted for a space (milliseconds)
    pub word_gap_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            tone_frequency: 800.0,
            dot_ms: 120,
            dash_ms: 360,
            intra_symbol_gap_ms: 100,
            letter_gap_ms: 300,
            word_gap_ms: 600,
        }
    }
}

impl TimingConfig {
    /// Default timing at the given sample rate and tone frequency
    pub fn new(sample_rate: u32, tone_frequency: f64) -> Result<Self> {
        let config = Self {
            sample_rate,
            tone_frequency,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the encoder preconditions
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(CodecError::InvalidParameters {
                msg: format!("Invalid sample rate: {}", self.sample_rate),
            });
        }

        if !(self.tone_frequency.is_finite() && self.tone_frequency > 0.0) {
            return Err(CodecError::InvalidParameters {
                msg: format!("Invalid tone frequency: {}", self.tone_frequency),
            });
        }

        Ok(())
    }

    /// Number of samples covering `duration_ms`, rounded down
    pub fn samples_for(&self, duration_ms: u32) -> usize {
        (u64::from(self.sample_rate) * u64::from(duration_ms) / 1000) as usize
    }
}

/// A single Morse symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MorseSymbol {
    Dot,
    Dash,
}

impl MorseSymbol {
    /// Conventional notation, `.` or `-`
    pub fn as_char(self) -> char {
        match self {
            MorseSymbol::Dot => '.',
            MorseSymbol::Dash => '-',
        }
    }
}

use MorseSymbol::{Dash, Dot};

const CODES: [(char, &[MorseSymbol]); 36] = [
    ('A', &[Dot, Dash]),
    ('B', &[Dash, Dot, Dot, Dot]),
    ('C', &[Dash, Dot, Dash, Dot]),
    ('D', &[Dash, Dot, Dot]),
    ('E', &[Dot]),
    ('F', &[Dot, Dot, Dash, Dot]),
    ('G', &[Dash, Dash, Dot]),
    ('H', &[Dot, Dot, Dot, Dot]),
    ('I', &[Dot, Dot]),
    ('J', &[Dot, Dash, Dash, Dash]),
    ('K', &[Dash, Dot, Dash]),
    ('L', &[Dot, Dash, Dot, Dot]),
    ('M', &[Dash, Dash]),
    ('N', &[Dash, Dot]),
    ('O', &[Dash, Dash, Dash]),
    ('P', &[Dot, Dash, Dash, Dot]),
    ('Q', &[Dash, Dash, Dot, Dash]),
    ('R', &[Dot, Dash, Dot]),
    ('S', &[Dot, Dot, Dot]),
    ('T', &[Dash]),
    ('U', &[Dot, Dot, Dash]),
    ('V', &[Dot, Dot, Dot, Dash]),
    ('W', &[Dot, Dash, Dash]),
    ('X', &[Dash, Dot, Dot, Dash]),
    ('Y', &[Dash, Dot, Dash, Dash]),
    ('Z', &[Dash, Dash, Dot, Dot]),
    ('0', &[Dash, Dash, Dash, Dash, Dash]),
    ('1', &[Dot, Dash, Dash, Dash, Dash]),
    ('2', &[Dot, Dot, Dash, Dash, Dash]),
    ('3', &[Dot, Dot, Dot, Dash, Dash]),
    ('4', &[Dot, Dot, Dot, Dot, Dash]),
    ('5', &[Dot, Dot, Dot, Dot, Dot]),
    ('6', &[Dash, Dot, Dot, Dot, Dot]),
    ('7', &[Dash, Dash, Dot, Dot, Dot]),
    ('8', &[Dash, Dash, Dash, Dot, Dot]),
    ('9', &[Dash, Dash, Dash, Dash, Dot]),
];

/// Morse code lookup table for A-Z and 0-9
#[derive(Debug)]
pub struct MorseTable {
    codes: HashMap<char, &'static [MorseSymbol]>,
}

impl MorseTable {
    /// The process-wide table, built on first use
    pub fn global() -> &'static MorseTable {
        static TABLE: OnceLock<MorseTable> = OnceLock::new();
        TABLE.get_or_init(|| MorseTable {
            codes: CODES.iter().copied().collect(),
        })
    }

    /// Code for an uppercase letter or digit
    pub fn lookup(&self, ch: char) -> Option<&'static [MorseSymbol]> {
        self.codes.get(&ch).copied()
    }

    /// Dot/dash notation for a character, e.g. `".-"` for `A`
    pub fn render(&self, ch: char) -> Option<String> {
        self.lookup(ch)
            .map(|code| code.iter().map(|symbol| symbol.as_char()).collect())
    }

    /// All supported characters in table order
    pub fn characters(&self) -> impl Iterator<Item = char> {
        CODES.iter().map(|(ch, _)| *ch)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// One timed step of a Morse transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorseElement {
    Tone(MorseSymbol),
    IntraSymbolGap,
    LetterGap,
    WordGap,
}

impl MorseElement {
    /// Length of this element under `config`
    pub fn duration_ms(&self, config: &TimingConfig) -> u32 {
        match self {
            MorseElement::Tone(Dot) => config.dot_ms,
            MorseElement::Tone(Dash) => config.dash_ms,
            MorseElement::IntraSymbolGap => config.intra_symbol_gap_ms,
            MorseElement::LetterGap => config.letter_gap_ms,
            MorseElement::WordGap => config.word_gap_ms,
        }
    }

    pub fn is_tone(&self) -> bool {
        matches!(self, MorseElement::Tone(_))
    }
}

/// Convert text to the element stream that will be keyed.
///
/// Every symbol is followed by an intra-symbol gap and every letter by a
/// letter gap, including the last one. A space becomes a single word gap.
pub fn text_to_elements(text: &str) -> Vec<MorseElement> {
    let table = MorseTable::global();
    let mut elements = Vec::new();

    for ch in text.to_uppercase().chars() {
        if ch == ' ' {
            elements.push(MorseElement::WordGap);
            continue;
        }

        let Some(code) = table.lookup(ch) else {
            trace!("Skipping unsupported character {:?}", ch);
            continue;
        };

        for &symbol in code {
            elements.push(MorseElement::Tone(symbol));
            elements.push(MorseElement::IntraSymbolGap);
        }
        elements.push(MorseElement::LetterGap);
    }

    elements
}

/// Kind of audio run a segment holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Tone,
    Silence,
}

/// A contiguous run of samples, either tone or silence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub samples: Vec<i16>,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Sine tone at `config.tone_frequency`, phase zero at the first sample
pub fn tone_segment(duration_ms: u32, config: &TimingConfig) -> Segment {
    let n = config.samples_for(duration_ms);
    let step = 2.0 * PI * config.tone_frequency / config.sample_rate as f64;
    let peak = TONE_AMPLITUDE * i16::MAX as f64;

    let samples = (0..n)
        .map(|i| {
            let value = (peak * (step * i as f64).sin()).round();
            value.clamp(i16::MIN as f64, i16::MAX as f64) as i16
        })
        .collect();

    Segment {
        kind: SegmentKind::Tone,
        samples,
    }
}

/// All-zero run of `duration_ms`
pub fn silence_segment(duration_ms: u32, config: &TimingConfig) -> Segment {
    Segment {
        kind: SegmentKind::Silence,
        samples: vec![0; config.samples_for(duration_ms)],
    }
}

/// Render the segments for `message`, in transmission order
pub fn segments(message: &str, config: &TimingConfig) -> Vec<Segment> {
    text_to_elements(message)
        .iter()
        .map(|element| {
            let duration = element.duration_ms(config);
            if element.is_tone() {
                tone_segment(duration, config)
            } else {
                silence_segment(duration, config)
            }
        })
        .collect()
}

/// Sample count `synthesize` will produce, from timing arithmetic alone
pub fn expected_sample_count(message: &str, config: &TimingConfig) -> usize {
    let elements = text_to_elements(message);
    if elements.is_empty() {
        return 1;
    }
    elements
        .iter()
        .map(|element| config.samples_for(element.duration_ms(config)))
        .sum()
}

/// Concatenate the segments for `message` into one PCM buffer.
///
/// A message that yields no segments at all becomes a single zero sample
/// so the result is always playable.
pub fn synthesize(message: &str, config: &TimingConfig) -> Result<PcmBuffer> {
    config.validate()?;

    let parts = segments(message, config);
    let total: usize = parts.iter().map(Segment::len).sum();

    let mut buffer = PcmBuffer::new(total.max(1), config.sample_rate)?;
    if parts.is_empty() {
        buffer.push(0);
    }
    for part in &parts {
        buffer.extend_from_slice(&part.samples);
    }

    Ok(buffer)
}

/// A finished WAV file for one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    bytes: Vec<u8>,
    sample_rate: u32,
    num_samples: usize,
}

impl EncodedAudio {
    /// Raw WAV bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Encode `message` as a mono 16-bit PCM WAV file.
///
/// Unsupported characters are dropped, never rejected. Failures come only
/// from an invalid `config`, or from a message long enough that its audio
/// overflows the WAV data chunk size limit.
pub fn encode(message: &str, config: &TimingConfig) -> Result<EncodedAudio> {
    let buffer = synthesize(message, config)?;
    let bytes = wav::write_wav(&buffer)?;

    debug!(
        "Encoded {} chars into {} samples ({:.2}s)",
        message.chars().count(),
        buffer.len(),
        buffer.duration_seconds()
    );

    Ok(EncodedAudio {
        bytes,
        sample_rate: config.sample_rate,
        num_samples: buffer.len(),
    })
}
