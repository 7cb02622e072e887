use std::collections::{BTreeSet, HashMap};

use super::analyzer::terms;
use super::{SparseVector, TermWeighting, VectorizerError};

/// Plain term-count model: every vocabulary term weighs 1 per occurrence.
///
/// Useful when the FAQ is too small for document frequencies to carry signal.
#[derive(Debug, Clone)]
pub struct BagOfWordsVectorizer {
    vocabulary: HashMap<String, usize>,
}

impl TermWeighting for BagOfWordsVectorizer {
    fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self, VectorizerError> {
        if documents.is_empty() {
            return Err(VectorizerError::NoDocuments);
        }

        let distinct: BTreeSet<String> = documents
            .iter()
            .flat_map(|d| terms(d.as_ref()).collect::<Vec<_>>())
            .collect();

        if distinct.is_empty() {
            return Err(VectorizerError::EmptyVocabulary {
                documents: documents.len(),
            });
        }

        let vocabulary = distinct
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term, column))
            .collect();

        Ok(Self { vocabulary })
    }

    fn transform(&self, text: &str) -> SparseVector {
        SparseVector::from_pairs(
            terms(text).filter_map(|term| self.vocabulary.get(&term).map(|&c| (c, 1.0))),
        )
    }

    fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    fn name(&self) -> &'static str {
        "bow"
    }
}
