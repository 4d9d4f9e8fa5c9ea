//! Normalized word-set lookups

use std::collections::HashSet;

use crate::text::normalize_word;

/// An immutable set of normalized words.
///
/// Two independent instances exist at runtime: the ignored (filler)
/// words and the command words. Updates replace a set wholesale; there
/// is no incremental add/remove.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Build a set from raw words, normalizing each entry and dropping
    /// entries that normalize to nothing.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Membership test for an already-normalized token.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// True when at least one token is in the set.
    pub fn contains_any(&self, tokens: &[String]) -> bool {
        tokens.iter().any(|t| self.contains(t))
    }

    /// True when every token is in the set (vacuously true for an
    /// empty token slice).
    pub fn contains_all(&self, tokens: &[String]) -> bool {
        tokens.iter().all(|t| self.contains(t))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
