//! Character sets genes are drawn from.

use super::{ConfigError, EvolutionConfig};

/// First code point of the printable ASCII gene range (space).
pub const PRINTABLE_ASCII_START: u8 = 32;

/// Code point one past the printable ASCII gene range.
pub const PRINTABLE_ASCII_END: u8 = 128;

/// Ordered, duplicate-free set of characters available to random genes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Codes 32 through 127 inclusive.
    pub fn printable_ascii() -> Self {
        Self {
            chars: (PRINTABLE_ASCII_START..PRINTABLE_ASCII_END)
                .map(char::from)
                .collect(),
        }
    }

    /// Build from an explicit character set. Duplicates are dropped, keeping
    /// first-occurrence order.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self, ConfigError> {
        let mut unique = Vec::new();
        for c in chars {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        if unique.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(Self { chars: unique })
    }

    /// Alphabet selected by a run configuration.
    pub fn from_config(config: &EvolutionConfig) -> Result<Self, ConfigError> {
        match &config.alphabet {
            Some(chars) => Self::new(chars.chars()),
            None => Ok(Self::printable_ascii()),
        }
    }

    /// Number of distinct characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed alphabet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`. Panics when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> char {
        self.chars[index]
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::printable_ascii()
    }
}
