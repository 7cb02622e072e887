//! FAQ document loading and validation.
//!
//! The on-disk format keeps questions and answers in two parallel maps keyed by the
//! stringified 1-based id:
//!
//! ```json
//! {
//!   "perguntas": { "1": "Qual o horário de funcionamento?" },
//!   "respostas": { "1": "Funcionamos das 9h às 18h." }
//! }
//! ```
//!
//! `questions` / `answers` are accepted as aliases for the two maps.

pub mod error;


pub use error::FaqError;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::hashing::hash_faq_entries;

/// One question/answer pair. Ids are 1-based and dense within a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(id: u32, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Row this entry occupies in the vector-space matrix.
    pub fn row(&self) -> usize {
        (self.id as usize).saturating_sub(1)
    }
}

/// Raw serde view of the FAQ file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FaqDocument {
    #[serde(rename = "perguntas", alias = "questions")]
    pub questions: BTreeMap<String, String>,

    #[serde(rename = "respostas", alias = "answers")]
    pub answers: BTreeMap<String, String>,
}

/// Validated FAQ collection, ordered by ascending id with `entries[i].id == i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCorpus {
    entries: Vec<FaqEntry>,
}

impl FaqCorpus {
    /// Reads and validates a FAQ JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FaqError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| FaqError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            entries = corpus.len(),
            "Loaded FAQ corpus"
        );
        Ok(corpus)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, FaqError> {
        let document: FaqDocument = serde_json::from_str(raw)?;
        Self::from_document(document)
    }

    /// Validates the parallel maps: matching key sets, integer ids >= 1, dense from 1.
    pub fn from_document(document: FaqDocument) -> Result<Self, FaqError> {
        let FaqDocument {
            questions,
            mut answers,
        } = document;

        if questions.is_empty() {
            return Err(FaqError::Empty);
        }

        let mut by_id: BTreeMap<u32, FaqEntry> = BTreeMap::new();
        for (key, question) in questions {
            let id = parse_id(&key)?;
            let answer = answers
                .remove(&key)
                .ok_or(FaqError::MissingAnswer { id })?;
            if by_id.insert(id, FaqEntry::new(id, question, answer)).is_some() {
                return Err(FaqError::DuplicateId { id });
            }
        }

        if let Some(key) = answers.into_keys().next() {
            return Err(FaqError::OrphanAnswer { key });
        }

        Self::from_ordered(by_id.into_values())
    }

    /// Assigns ids `1..=n` in iteration order.
    pub fn from_pairs<I, Q, A>(pairs: I) -> Result<Self, FaqError>
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<String>,
        A: Into<String>,
    {
        let mut entries = Vec::new();
        for (index, (question, answer)) in pairs.into_iter().enumerate() {
            let id = u32::try_from(index + 1).map_err(|_| FaqError::InvalidId {
                key: (index + 1).to_string(),
            })?;
            entries.push(FaqEntry::new(id, question, answer));
        }
        Self::from_ordered(entries)
    }

    fn from_ordered(entries: impl IntoIterator<Item = FaqEntry>) -> Result<Self, FaqError> {
        let entries: Vec<FaqEntry> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(FaqError::Empty);
        }

        for (expected, entry) in (1u32..).zip(&entries) {
            if entry.id != expected {
                return Err(FaqError::NonDenseIds {
                    expected,
                    found: entry.id,
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&FaqEntry> {
        id.checked_sub(1)
            .and_then(|row| self.entries.get(row as usize))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Content digest of every id, question and answer, as 16 hex digits.
    pub fn fingerprint(&self) -> String {
        format!("{:016x}", hash_faq_entries(&self.entries))
    }

    pub fn into_entries(self) -> Vec<FaqEntry> {
        self.entries
    }
}

fn parse_id(key: &str) -> Result<u32, FaqError> {
    match key.trim().parse::<u32>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(FaqError::InvalidId {
            key: key.to_string(),
        }),
    }
}
