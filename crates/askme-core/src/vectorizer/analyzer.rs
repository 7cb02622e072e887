//! Term extraction shared by the vectorizers.
//!
//! A term is a maximal run of word characters (alphanumeric or `_`) at least two characters
//! long, lowercased. Single-character runs such as `"o"` or `"a"` never enter the vocabulary.

pub const MIN_TERM_CHARS: usize = 2;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|run| run.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_lowercase)
}
