//! Candidate word sources

use aerogame_codecs::cw::MorseTable;

/// Environment variable holding a comma-separated word list
pub const WORDS_ENV_VAR: &str = "AEROGAME_WORDS";

/// Used when nothing else provides words
pub const DEFAULT_WORDS: [&str; 5] = ["SALAM", "HELLO", "SKY", "MOON", "STAR"];

/// Anything that can hand out candidate secret words
pub trait WordSource {
    /// Candidate words, in a stable order
    fn candidate_words(&self) -> Vec<String>;
}

/// Split a comma-separated list, trimming entries and dropping empty ones
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when every character of `word` can be keyed, ignoring case.
///
/// Spaces are allowed between letters, but the word needs at least one
/// keyable character.
pub fn is_playable_word(word: &str) -> bool {
    let table = MorseTable::global();
    let word = word.trim().to_uppercase();

    word.chars().any(|ch| table.lookup(ch).is_some())
        && word.chars().all(|ch| ch == ' ' || table.lookup(ch).is_some())
}

/// A fixed word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticWords {
    words: Vec<String>,
}

impl StaticWords {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StaticWords {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}

impl WordSource for StaticWords {
    fn candidate_words(&self) -> Vec<String> {
        self.words.clone()
    }
}

/// Words from an environment variable, falling back to [`DEFAULT_WORDS`]
#[derive(Debug, Clone)]
pub struct EnvWords {
    var: String,
}

impl EnvWords {
    /// Read from a custom variable name
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvWords {
    fn default() -> Self {
        Self::with_var(WORDS_ENV_VAR)
    }
}

impl WordSource for EnvWords {
    fn candidate_words(&self) -> Vec<String> {
        let words = std::env::var(&self.var)
            .map(|raw| parse_word_list(&raw))
            .unwrap_or_default();

        if words.is_empty() {
            return StaticWords::default().candidate_words();
        }
        words
    }
}

/// Uses `primary` unless it comes back empty
#[derive(Debug, Clone)]
pub struct FallbackWords<A, B> {
    primary: A,
    fallback: B,
}

impl<A, B> FallbackWords<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: WordSource, B: WordSource> WordSource for FallbackWords<A, B> {
    fn candidate_words(&self) -> Vec<String> {
        let words = self.primary.candidate_words();
        if words.is_empty() {
            self.fallback.candidate_words()
        } else {
            words
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_list() {
        assert_eq!(
            parse_word_list(" SALAM, moon ,,STAR ,"),
            vec!["SALAM", "moon", "STAR"]
        );
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list(" , ,").is_empty());
    }

    #[test]
    fn test_playable_words() {
        assert!(is_playable_word("SALAM"));
        assert!(is_playable_word(" moon "));
        assert!(is_playable_word("CQ DX 73"));
        assert!(!is_playable_word("HI!"));
        assert!(!is_playable_word("SALAM-1"));
        assert!(!is_playable_word("CAFÉ"));
        assert!(!is_playable_word("   "));
        assert!(!is_playable_word(""));
    }

    #[test]
    fn test_default_words_are_playable() {
        assert!(DEFAULT_WORDS.iter().all(|word| is_playable_word(word)));
    }

    #[test]
    fn test_default_words() {
        assert_eq!(
            StaticWords::default().candidate_words(),
            vec!["SALAM", "HELLO", "SKY", "MOON", "STAR"]
        );
    }

    #[test]
    fn test_env_words() {
        let var = "AEROGAME_WORDS_TEST_ENV_WORDS";
        let source = EnvWords::with_var(var);

        std::env::remove_var(var);
        assert_eq!(source.candidate_words(), StaticWords::default().candidate_words());

        std::env::set_var(var, " , ");
        assert_eq!(source.candidate_words(), StaticWords::default().candidate_words());

        std::env::set_var(var, "CQ, DX");
        assert_eq!(source.candidate_words(), vec!["CQ", "DX"]);

        std::env::remove_var(var);
    }

    #[test]
    fn test_fallback_words() {
        let empty = StaticWords::new(Vec::<String>::new());
        let chained = FallbackWords::new(empty, StaticWords::new(["QRZ"]));
        assert_eq!(chained.candidate_words(), vec!["QRZ"]);

        let chained = FallbackWords::new(StaticWords::new(["TEST"]), StaticWords::default());
        assert_eq!(chained.candidate_words(), vec!["TEST"]);
    }
}
