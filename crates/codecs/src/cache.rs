//! Memoizing wrapper around [`encode`](crate::cw::encode)

use crate::cw::{encode, EncodedAudio, TimingConfig};
use crate::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Caches encoded audio per message for one fixed timing configuration
#[derive(Debug)]
pub struct CachedEncoder {
    config: TimingConfig,
    entries: HashMap<String, Arc<EncodedAudio>>,
    hits: u64,
    misses: u64,
}

impl CachedEncoder {
    /// Create an empty cache; fails if `config` is invalid
    pub fn new(config: TimingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        })
    }

    /// Encode `message`, reusing a previous result for the same string
    pub fn encode(&mut self, message: &str) -> Result<Arc<EncodedAudio>> {
        if let Some(audio) = self.entries.get(message) {
            self.hits += 1;
            trace!("Cache hit for {:?}", message);
            return Ok(Arc::clone(audio));
        }

        let audio = Arc::new(encode(message, &self.config)?);
        self.misses += 1;
        self.entries.insert(message.to_string(), Arc::clone(&audio));
        Ok(audio)
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// Number of cached messages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every cached entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TimingConfig {
        TimingConfig {
            sample_rate: 8000,
            ..TimingConfig::default()
        }
    }

    #[test]
    fn test_reuses_results() {
        let mut cache = CachedEncoder::new(config()).unwrap();

        let first = cache.encode("MOON").unwrap();
        let second = cache.encode("MOON").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_matches_plain_encode() {
        let mut cache = CachedEncoder::new(config()).unwrap();
        let cached = cache.encode("sky").unwrap();
        assert_eq!(*cached, encode("sky", &config()).unwrap());
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let mut cache = CachedEncoder::new(config()).unwrap();
        let lower = cache.encode("star").unwrap();
        let upper = cache.encode("STAR").unwrap();

        // Same audio, separate entries
        assert_eq!(lower, upper);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_keeps_config() {
        let cache = CachedEncoder::new(config()).unwrap();
        assert_eq!(cache.config(), &config());
    }

    #[test]
    fn test_clear() {
        let mut cache = CachedEncoder::new(config()).unwrap();
        cache.encode("E").unwrap();
        cache.encode("E").unwrap();
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let bad = TimingConfig {
            tone_frequency: 0.0,
            ..TimingConfig::default()
        };
        assert!(CachedEncoder::new(bad).is_err());
    }
}
