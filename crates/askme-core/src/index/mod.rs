//! Precomputed, read-only view of the FAQ corpus.
//!
//! [`CorpusIndex::build`] folds and tokenizes every question once, fits the term-weighting
//! model on the folded questions (in id order) and stores one vector row per entry at
//! `row == id - 1`. Nothing in the index changes afterwards, so it can be shared across
//! request handlers behind an `Arc` without locking.

pub mod error;


pub use error::IndexError;

use tracing::info;

use crate::faq::{FaqCorpus, FaqEntry};
use crate::text::NormalizedText;
use crate::vectorizer::{SparseVector, TermWeighting, TfIdfVectorizer};

/// A FAQ entry together with its cached normalized question and vector row.
#[derive(Debug, Clone)]
pub struct IndexedEntry {
    entry: FaqEntry,
    question: NormalizedText,
    vector: SparseVector,
}

impl IndexedEntry {
    pub fn id(&self) -> u32 {
        self.entry.id
    }

    pub fn entry(&self) -> &FaqEntry {
        &self.entry
    }

    pub fn question(&self) -> &NormalizedText {
        &self.question
    }

    pub fn vector(&self) -> &SparseVector {
        &self.vector
    }
}

#[derive(Debug)]
pub struct CorpusIndex<W: TermWeighting = TfIdfVectorizer> {
    entries: Vec<IndexedEntry>,
    model: W,
    fingerprint: String,
}

impl<W: TermWeighting> CorpusIndex<W> {
    pub fn build(corpus: FaqCorpus) -> Result<Self, IndexError> {
        let fingerprint = corpus.fingerprint();

        let normalized: Vec<NormalizedText> = corpus
            .entries()
            .iter()
            .map(|e| NormalizedText::new(&e.question))
            .collect();

        let folded: Vec<&str> = normalized.iter().map(NormalizedText::folded).collect();
        let model = W::fit(folded.as_slice())?;

        let entries: Vec<IndexedEntry> = corpus
            .into_entries()
            .into_iter()
            .zip(normalized)
            .map(|(entry, question)| {
                let vector = model.transform(question.folded());
                IndexedEntry {
                    entry,
                    question,
                    vector,
                }
            })
            .collect();

        info!(
            entries = entries.len(),
            vocabulary = model.dimension(),
            vectorizer = model.name(),
            fingerprint = %fingerprint,
            "Built corpus index"
        );

        Ok(Self {
            entries,
            model,
            fingerprint,
        })
    }

    /// Entries in ascending id order.
    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&IndexedEntry> {
        id.checked_sub(1)
            .and_then(|row| self.entries.get(row as usize))
    }

    pub fn model(&self) -> &W {
        &self.model
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fingerprint of the corpus this index was built from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
