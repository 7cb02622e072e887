//! Vector-space term weighting.
//!
//! A [`TermWeighting`] model is fitted once on the folded FAQ questions and then maps any
//! text to a [`SparseVector`] over the vocabulary frozen at fit time. Terms the model never
//! saw are ignored by [`TermWeighting::transform`].
//!
//! Two implementations ship with the crate:
//!
//! - [`TfIdfVectorizer`]: smoothed inverse document frequency, L2-normalized rows.
//! - [`BagOfWordsVectorizer`]: raw term counts, no corpus statistics.

pub mod analyzer;
pub mod bow;
pub mod error;
pub mod sparse;
pub mod tfidf;


pub use bow::BagOfWordsVectorizer;
pub use error::VectorizerError;
pub use sparse::SparseVector;
pub use tfidf::TfIdfVectorizer;

/// Fit/transform capability used by [`CorpusIndex`](crate::index::CorpusIndex).
///
/// Implementations must be read-only after `fit` so a fitted model can be shared across
/// threads without synchronization.
pub trait TermWeighting: Send + Sync + Sized {
    /// Learns the vocabulary (and any corpus statistics) from `documents`.
    ///
    /// Fails when `documents` is empty or yields no terms at all.
    fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self, VectorizerError>;

    /// Maps `text` into the fitted vocabulary space.
    fn transform(&self, text: &str) -> SparseVector;

    /// Number of columns (vocabulary size).
    fn dimension(&self) -> usize;

    /// Short identifier used in logs and readiness reports.
    fn name(&self) -> &'static str;
}
