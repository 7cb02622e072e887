use serde::Serialize;

use crate::constants::{
    ANSWER_THRESHOLD, COSINE_WEIGHT, JACCARD_WEIGHT, OUT_OF_SCOPE_THRESHOLD, OVERLAP_WEIGHT,
    SEQUENCE_WEIGHT,
};

/// The four raw signals for one (query, entry) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalScores {
    pub jaccard: f64,
    pub sequence_ratio: f64,
    pub overlap: f64,
    pub cosine: f64,
}

impl SignalScores {
    /// Weighted blend of the four signals. Weights are fixed and never renormalized.
    pub fn combined(&self) -> f64 {
        JACCARD_WEIGHT * self.jaccard
            + SEQUENCE_WEIGHT * self.sequence_ratio
            + OVERLAP_WEIGHT * self.overlap
            + COSINE_WEIGHT * self.cosine
    }
}

/// One row of the per-query score record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredEntry {
    pub id: u32,
    pub signals: SignalScores,
    pub score: f64,
}

impl ScoredEntry {
    pub fn new(id: u32, signals: SignalScores) -> Self {
        Self {
            id,
            signals,
            score: signals.combined(),
        }
    }
}

/// Response band chosen for the best-scoring entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteDecision {
    /// Score above [`ANSWER_THRESHOLD`]: reply with the stored answer.
    Answered {
        /// Id of the matched entry.
        id: u32,
        score: f64,
    },
    /// Score between the thresholds (inclusive): ask the user to rephrase.
    Clarify {
        /// Id of the closest entry.
        id: u32,
        score: f64,
    },
    /// Score below [`OUT_OF_SCOPE_THRESHOLD`].
    OutOfScope {
        /// Id of the closest entry.
        id: u32,
        score: f64,
    },
}

impl RouteDecision {
    /// Applies the threshold policy. Both boundaries fall into [`RouteDecision::Clarify`].
    pub fn from_best(id: u32, score: f64) -> Self {
        if score > ANSWER_THRESHOLD {
            RouteDecision::Answered { id, score }
        } else if score < OUT_OF_SCOPE_THRESHOLD {
            RouteDecision::OutOfScope { id, score }
        } else {
            RouteDecision::Clarify { id, score }
        }
    }

    /// Returns `true` if the stored answer is returned.
    pub fn is_answered(&self) -> bool {
        matches!(self, RouteDecision::Answered { .. })
    }

    /// Winning combined score (the reported confidence).
    pub fn score(&self) -> f64 {
        match self {
            RouteDecision::Answered { score, .. }
            | RouteDecision::Clarify { score, .. }
            | RouteDecision::OutOfScope { score, .. } => *score,
        }
    }

    /// Id of the best-scoring entry, whichever band it fell into.
    pub fn best_id(&self) -> u32 {
        match self {
            RouteDecision::Answered { id, .. }
            | RouteDecision::Clarify { id, .. }
            | RouteDecision::OutOfScope { id, .. } => *id,
        }
    }

    /// Stable lowercase label, used in response headers and logs.
    pub fn label(&self) -> &'static str {
        match self {
            RouteDecision::Answered { .. } => "answered",
            RouteDecision::Clarify { .. } => "clarify",
            RouteDecision::OutOfScope { .. } => "out_of_scope",
        }
    }
}

impl std::fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteDecision::Answered { id, score } => {
                write!(f, "ANSWERED (id: {}, score: {:.4})", id, score)
            }
            RouteDecision::Clarify { id, score } => {
                write!(f, "CLARIFY (id: {}, score: {:.4})", id, score)
            }
            RouteDecision::OutOfScope { id, score } => {
                write!(f, "OUT_OF_SCOPE (id: {}, score: {:.4})", id, score)
            }
        }
    }
}

/// Reply for one query: the text to show and the winning score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    pub answer: String,
    pub confidence: f64,
    #[serde(skip)]
    pub decision: RouteDecision,
}
