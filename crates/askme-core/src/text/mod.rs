//! Text folding and tokenization.
//!
//! Every comparison in the crate runs on one of two views of a string:
//!
//! - **folded text**: lowercased, with diacritics removed (`"Horário"` → `"horario"`);
//! - **tokens**: folded text with ASCII punctuation dropped, split on whitespace.
//!
//! Both are total functions. Empty input produces empty output.

use std::collections::BTreeSet;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercases `text` and strips combining marks after canonical decomposition.
///
/// Punctuation and whitespace are preserved.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Folds `text`, removes ASCII punctuation and splits on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped: String = fold(text)
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped.split_whitespace().map(str::to_owned).collect()
}

/// Deduplicated token collection used by the set-based signals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: BTreeSet<String>,
}

impl TokenSet {
    pub fn from_text(text: &str) -> Self {
        tokenize(text).into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of tokens present in both sets.
    pub fn intersection_len(&self, other: &TokenSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.tokens.iter().filter(|t| large.tokens.contains(*t)).count()
    }

    /// Number of distinct tokens across both sets.
    pub fn union_len(&self, other: &TokenSet) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// Both normalized views of one string, computed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    folded: String,
    tokens: TokenSet,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self {
            folded: fold(raw),
            tokens: TokenSet::from_text(raw),
        }
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }
}
