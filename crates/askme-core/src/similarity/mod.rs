//! Pairwise similarity signals.
//!
//! Two signals compare token sets ([`jaccard`], [`overlap_coefficient`]), one compares folded
//! character sequences ([`sequence_ratio`]) and one compares term-weight vectors ([`cosine`]).
//! All return a value in `[0, 1]`.
//!
//! The empty-input policies differ on purpose: two empty token sets are fully similar under
//! Jaccard but fully dissimilar under the overlap coefficient.

pub mod sequence;


pub use sequence::{matching_characters, sequence_ratio};

use crate::text::TokenSet;
use crate::vectorizer::SparseVector;

/// `|A ∩ B| / |A ∪ B|`. Two empty sets score `1.0`.
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let union = a.union_len(b);
    if union == 0 {
        return 0.0;
    }
    a.intersection_len(b) as f64 / union as f64
}

/// `|A ∩ B| / min(|A|, |B|)`. Any empty side scores `0.0`.
pub fn overlap_coefficient(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    a.intersection_len(b) as f64 / a.len().min(b.len()) as f64
}

/// Cosine of the angle between two term-weight vectors; `0.0` when either is all-zero.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}
