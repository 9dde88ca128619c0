//! # Tokenizer / Normalizer
//!
//! Turns a free-text ingredient mention into a normalized token:
//! lower-cased, stop-word stripped, punctuation stripped.
//!
//! No side effects, no allocation beyond the returned token. Everything here
//! is a pure function of its input.

/// Words removed from mentions before tokenization.
///
/// These are quantity/preparation noise that would otherwise fragment the
/// token space ("fresh basil" and "basil" must be the same token).
pub const STOP_WORDS: &[&str] = &[
    "of", "and", "fresh", "chopped", "minced", "optional", "to", "taste",
];

/// Normalize a raw ingredient mention into a token.
///
/// - Lower-case the input
/// - Replace characters outside `[a-z0-9 -]` with spaces
/// - Drop stop words as whole words
/// - Collapse whitespace and trim
///
/// Returns `None` when nothing survives normalization.
#[must_use]
pub fn normalize_mention(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|ch| {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
                ch
            } else {
                ' '
            }
        })
        .collect();

    let token = cleaned
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ");

    if token.is_empty() { None } else { Some(token) }
}

/// Split a single delimited ingredient string into individual mentions.
///
/// Recipes sometimes supply ingredients as one string; the delimiters are
/// newline, comma, and semicolon. Empty pieces are dropped.
#[must_use]
pub fn split_mentions(text: &str) -> Vec<&str> {
    text.split(['\n', ',', ';'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Title-case a token for display ("olive oil" -> "Olive Oil").
///
/// Used to name corpus-derived ingredients that have no curated metadata.
#[must_use]
pub fn title_case(token: &str) -> String {
    token
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// TESTS
// =============================================================================
