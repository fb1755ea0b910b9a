//! Matcher — counts how many keyword tokens occur as whole words in a document.

use std::collections::HashSet;

use crate::screening::keywords::{fold_case, words};

/// Case-folded set of the whole words in a document, built once per document.
pub struct DocumentWords(HashSet<String>);

impl DocumentWords {
    pub fn new(text: &str) -> Self {
        Self(words(text).map(fold_case).collect())
    }

    /// Whole-word, case-insensitive presence check.
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(&fold_case(token))
    }
}

/// Raw score of a document: one point per token that appears in it as a whole word.
///
/// Presence counts, not frequency: a word repeated in the document scores once per token.
/// A token repeated in `tokens` scores once per repetition.
pub fn match_document(text: &str, tokens: &[String]) -> u32 {
    if text.is_empty() || tokens.is_empty() {
        return 0;
    }

    let document = DocumentWords::new(text);
    tokens.iter().filter(|t| document.contains(t)).count() as u32
}
