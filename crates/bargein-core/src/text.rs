//! Transcript normalization
//!
//! Raw ASR words are folded into a canonical comparable form before
//! any word-set lookup: lowercase, strip everything that is not a
//! letter, digit, or whitespace, then trim.

/// Normalize a single word.
///
/// All-punctuation input yields an empty string, which callers must
/// treat as "not a token".
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split a transcript on whitespace and normalize each piece,
/// discarding pieces that normalize to nothing.
pub fn tokenize(transcript: &str) -> Vec<String> {
    transcript
        .split_whitespace()
        .map(normalize_word)
        .filter(|t| !t.is_empty())
        .collect()
}
