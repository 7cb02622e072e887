use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use super::analyzer::terms;
use super::{SparseVector, TermWeighting, VectorizerError};

/// TF-IDF weighting with smoothed IDF and L2-normalized output.
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, where `n` is the number of fitted documents and
/// `df(t)` the number of documents containing `t`. Term frequency is the raw count.
/// Columns are assigned in lexicographic term order.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Column assigned to `term`, if it was seen at fit time.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of `term`, if it was seen at fit time.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.column(term).map(|c| self.idf[c])
    }
}

impl TermWeighting for TfIdfVectorizer {
    fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self, VectorizerError> {
        if documents.is_empty() {
            return Err(VectorizerError::NoDocuments);
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            let distinct: BTreeSet<String> = terms(document.as_ref()).collect();
            for term in distinct {
                *document_frequency.entry(term).or_default() += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(VectorizerError::EmptyVocabulary {
                documents: documents.len(),
            });
        }

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());

        for (column, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, column);
        }

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vectorizer"
        );

        Ok(Self { vocabulary, idf })
    }

    fn transform(&self, text: &str) -> SparseVector {
        let weighted = terms(text).filter_map(|term| {
            self.vocabulary
                .get(&term)
                .map(|&column| (column, self.idf[column]))
        });

        SparseVector::from_pairs(weighted).l2_normalized()
    }

    fn dimension(&self) -> usize {
        self.idf.len()
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}
