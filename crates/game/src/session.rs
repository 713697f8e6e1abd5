//! Challenges and the game session that owns them

use crate::words::{is_playable_word, WordSource};
use crate::{GameError, Result};
use aerogame_codecs::cache::CachedEncoder;
use aerogame_codecs::{EncodedAudio, TimingConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Opaque 8-hex-digit tag shown next to a challenge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChallengeId(String);

impl ChallengeId {
    fn generate<R: Rng>(rng: &mut R) -> Self {
        Self(format!("{:08x}", rng.gen::<u32>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One round: the secret word and its audio
#[derive(Debug, Clone)]
pub struct Challenge {
    pub id: ChallengeId,
    pub word: String,
    pub audio: Arc<EncodedAudio>,
    attempts: u32,
}

impl Challenge {
    /// Answers submitted so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Trimmed, case-insensitive exact match
    pub fn is_answer(&self, answer: &str) -> bool {
        answer.trim().to_uppercase() == self.word
    }
}

/// Result of checking an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct { reward_code: Option<String> },
    Incorrect,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }
}

/// Game state for one player
pub struct Session<S, R = StdRng> {
    source: S,
    encoder: CachedEncoder,
    rng: R,
    reward_code: Option<String>,
    current: Option<Challenge>,
}

impl<S: WordSource> Session<S, StdRng> {
    /// Session seeded from OS entropy
    pub fn new(source: S, config: TimingConfig) -> Result<Self> {
        Self::with_rng(source, config, StdRng::from_entropy())
    }
}

impl<S: WordSource, R: Rng> Session<S, R> {
    /// Session with a caller-provided random source
    pub fn with_rng(source: S, config: TimingConfig, rng: R) -> Result<Self> {
        Ok(Self {
            source,
            encoder: CachedEncoder::new(config)?,
            rng,
            reward_code: None,
            current: None,
        })
    }

    /// Code handed out with every correct answer
    pub fn with_reward_code(mut self, code: impl Into<String>) -> Self {
        self.reward_code = Some(code.into());
        self
    }

    /// Pick a random word, render it and make it the active challenge
    pub fn new_challenge(&mut self) -> Result<&Challenge> {
        let words = self.source.candidate_words();
        if words.is_empty() {
            return Err(GameError::EmptyWordSource);
        }

        // An unkeyable character would make the word impossible to guess
        let playable: Vec<&String> = words
            .iter()
            .filter(|word| {
                let ok = is_playable_word(word);
                if !ok {
                    warn!("Skipping word {:?}: not keyable in Morse", word);
                }
                ok
            })
            .collect();

        let chosen = playable
            .choose(&mut self.rng)
            .ok_or(GameError::NoPlayableWords {
                rejected: words.len(),
            })?;
        let word = chosen.trim().to_uppercase();

        let audio = self.encoder.encode(&word)?;
        let id = ChallengeId::generate(&mut self.rng);

        info!(
            "New challenge {} ({:.2}s at {} Hz, {} of {} candidates playable)",
            id,
            audio.duration_seconds(),
            self.encoder.config().tone_frequency,
            playable.len(),
            words.len()
        );

        let challenge: &Challenge = self.current.insert(Challenge {
            id,
            word,
            audio,
            attempts: 0,
        });
        Ok(challenge)
    }

    /// The active challenge, if any
    pub fn current(&self) -> Option<&Challenge> {
        self.current.as_ref()
    }

    /// Check an answer against the active challenge
    pub fn submit(&mut self, answer: &str) -> Result<Verdict> {
        let challenge = self.current.as_mut().ok_or(GameError::NoActiveChallenge)?;
        challenge.attempts += 1;

        if challenge.is_answer(answer) {
            info!(
                "Challenge {} solved after {} attempt(s)",
                challenge.id, challenge.attempts
            );
            Ok(Verdict::Correct {
                reward_code: self.reward_code.clone(),
            })
        } else {
            debug!("Challenge {}: wrong answer {:?}", challenge.id, answer);
            Ok(Verdict::Incorrect)
        }
    }

    /// The encoder cache backing this session
    pub fn encoder(&self) -> &CachedEncoder {
        &self.encoder
    }
}
