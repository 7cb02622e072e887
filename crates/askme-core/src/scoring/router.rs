use rayon::prelude::*;
use tracing::debug;

use crate::constants::{CLARIFY_MESSAGE, DEFAULT_PARALLEL_THRESHOLD, OUT_OF_SCOPE_MESSAGE};
use crate::index::{CorpusIndex, IndexedEntry};
use crate::similarity::{cosine, jaccard, overlap_coefficient, sequence_ratio};
use crate::text::NormalizedText;
use crate::vectorizer::{SparseVector, TermWeighting, TfIdfVectorizer};

use super::error::ScoringError;
use super::types::{QueryResponse, RouteDecision, ScoredEntry, SignalScores};

/// A query normalized once and projected into the index's vector space.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    text: NormalizedText,
    vector: SparseVector,
}

impl PreparedQuery {
    pub fn new<W: TermWeighting>(query: &str, model: &W) -> Self {
        let text = NormalizedText::new(query);
        let vector = model.transform(text.folded());
        Self { text, vector }
    }

    pub fn text(&self) -> &NormalizedText {
        &self.text
    }

    pub fn vector(&self) -> &SparseVector {
        &self.vector
    }

    /// All four signals between this query and one indexed question.
    pub fn signals(&self, entry: &IndexedEntry) -> SignalScores {
        let question = entry.question();
        SignalScores {
            jaccard: jaccard(self.text.tokens(), question.tokens()),
            sequence_ratio: sequence_ratio(self.text.folded(), question.folded()),
            overlap: overlap_coefficient(self.text.tokens(), question.tokens()),
            cosine: cosine(&self.vector, entry.vector()),
        }
    }
}

/// Position of the highest score; the earliest position wins ties.
pub fn stable_argmax(scored: &[ScoredEntry]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (position, candidate) in scored.iter().enumerate() {
        match best {
            Some((_, top)) if candidate.score <= top => {}
            _ => best = Some((position, candidate.score)),
        }
    }
    best.map(|(position, _)| position)
}

/// Scores queries against a [`CorpusIndex`] and routes them to a reply.
pub struct FaqRouter<W: TermWeighting = TfIdfVectorizer> {
    index: CorpusIndex<W>,
    parallel_threshold: usize,
}

impl<W: TermWeighting> std::fmt::Debug for FaqRouter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaqRouter")
            .field("entries", &self.index.len())
            .field("vectorizer", &self.index.model().name())
            .field("parallel_threshold", &self.parallel_threshold)
            .finish()
    }
}

impl<W: TermWeighting> FaqRouter<W> {
    pub fn new(index: CorpusIndex<W>) -> Self {
        Self {
            index,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Corpus size from which entries are scored on the rayon pool instead of sequentially.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn index(&self) -> &CorpusIndex<W> {
        &self.index
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Score record for `query`: one [`ScoredEntry`] per indexed entry, in id order.
    pub fn score_all(&self, query: &str) -> Result<Vec<ScoredEntry>, ScoringError> {
        if query.is_empty() {
            return Err(ScoringError::EmptyQuery);
        }

        let prepared = PreparedQuery::new(query, self.index.model());
        let entries = self.index.entries();
        let score = |entry: &IndexedEntry| ScoredEntry::new(entry.id(), prepared.signals(entry));

        let scored: Vec<ScoredEntry> = if entries.len() >= self.parallel_threshold {
            entries.par_iter().map(score).collect()
        } else {
            entries.iter().map(score).collect()
        };

        Ok(scored)
    }

    /// Best-scoring entry for `query`, ties broken by ascending id.
    pub fn best_match(&self, query: &str) -> Result<(&IndexedEntry, ScoredEntry), ScoringError> {
        let scored = self.score_all(query)?;
        let position = stable_argmax(&scored).ok_or(ScoringError::EmptyIndex)?;

        // scored is aligned with the index entries, one row per entry.
        Ok((&self.index.entries()[position], scored[position]))
    }

    /// Scores `query` and applies the threshold policy.
    pub fn route(&self, query: &str) -> Result<QueryResponse, ScoringError> {
        let (entry, best) = self.best_match(query)?;
        let decision = RouteDecision::from_best(best.id, best.score);

        let answer = match decision {
            RouteDecision::Answered { .. } => entry.entry().answer.clone(),
            RouteDecision::Clarify { .. } => CLARIFY_MESSAGE.to_string(),
            RouteDecision::OutOfScope { .. } => OUT_OF_SCOPE_MESSAGE.to_string(),
        };

        debug!(
            query_len = query.len(),
            best_id = best.id,
            score = best.score,
            jaccard = best.signals.jaccard,
            sequence_ratio = best.signals.sequence_ratio,
            overlap = best.signals.overlap,
            cosine = best.signals.cosine,
            decision = decision.label(),
            "Routed query"
        );

        Ok(QueryResponse {
            answer,
            confidence: best.score,
            decision,
        })
    }
}
