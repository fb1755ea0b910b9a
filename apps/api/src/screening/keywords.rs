//! Keyword extraction — splits a job description into the literal tokens resumes are matched on.
//!
//! A token is a maximal run of word characters (Unicode alphanumerics and `_`). Everything else
//! is a separator. Case is preserved here and ignored by the matcher.

use std::collections::HashSet;

/// Returns true for characters that may appear inside a word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterates the maximal word-character runs of `text`, in order of appearance.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

/// Case-folds one character at a time using the simple (single-character) lowercase mapping,
/// so `İ` folds to `i` and `Σ` always folds to `σ`.
pub fn fold_case(word: &str) -> String {
    word.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Extracts keyword tokens from a job description.
///
/// Repeated words yield repeated tokens, and each one scores independently downstream.
/// With `dedupe` set, only the first occurrence of each word (compared case-insensitively)
/// is kept.
pub fn extract_keywords(job_description: &str, dedupe: bool) -> Vec<String> {
    if !dedupe {
        return words(job_description).map(String::from).collect();
    }

    let mut seen = HashSet::new();
    words(job_description)
        .filter(|w| seen.insert(fold_case(w)))
        .map(String::from)
        .collect()
}
