//! Askme library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Corpus
//! - [`FaqCorpus`], [`FaqEntry`], [`FaqError`] - FAQ document loading and validation
//! - [`CorpusIndex`], [`IndexedEntry`] - Questions normalized and vectorized once at startup
//!
//! ## Scoring
//! - [`FaqRouter`] - Blends four similarity signals and applies the threshold policy
//! - [`QueryResponse`], [`RouteDecision`], [`ScoredEntry`], [`SignalScores`] - Result types
//!
//! ## Building Blocks
//! - [`text`] - Accent folding and tokenization
//! - [`similarity`] - Jaccard, overlap coefficient, sequence ratio, cosine
//! - [`vectorizer`] - TF-IDF and bag-of-words term weighting
//!
//! ## Constants
//! Blend weights, routing thresholds and reply messages live in [`constants`].

pub mod config;
pub mod constants;
pub mod faq;
pub mod hashing;
pub mod index;
pub mod scoring;
pub mod similarity;
pub mod text;
pub mod vectorizer;

pub use config::{Config, ConfigError};
pub use constants::{
    ANSWER_THRESHOLD, CLARIFY_MESSAGE, DEFAULT_PARALLEL_THRESHOLD, OUT_OF_SCOPE_MESSAGE,
    OUT_OF_SCOPE_THRESHOLD,
};
pub use faq::{FaqCorpus, FaqDocument, FaqEntry, FaqError};
pub use hashing::hash_faq_entries;
pub use index::{CorpusIndex, IndexError, IndexedEntry};
pub use scoring::{
    FaqRouter, PreparedQuery, QueryResponse, RouteDecision, ScoredEntry, ScoringError,
    SignalScores, stable_argmax,
};
pub use text::{NormalizedText, TokenSet, fold, tokenize};
pub use vectorizer::{
    BagOfWordsVectorizer, SparseVector, TermWeighting, TfIdfVectorizer, VectorizerError,
};
