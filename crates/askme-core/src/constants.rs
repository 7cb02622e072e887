//! Cross-cutting, shared constants.
//!
//! The blend weights and routing thresholds are calibrated together. Changing one without
//! re-checking the others shifts which queries land in each response band.

/// Weight of the token-set Jaccard signal.
pub const JACCARD_WEIGHT: f64 = 0.45;
/// Weight of the character sequence-ratio signal.
pub const SEQUENCE_WEIGHT: f64 = 0.25;
/// Weight of the token-set overlap coefficient.
pub const OVERLAP_WEIGHT: f64 = 0.10;
/// Weight of the vector-space cosine signal.
pub const COSINE_WEIGHT: f64 = 0.20;

/// A best score strictly above this returns the stored answer.
pub const ANSWER_THRESHOLD: f64 = 0.60;
/// A best score strictly below this returns [`OUT_OF_SCOPE_MESSAGE`].
pub const OUT_OF_SCOPE_THRESHOLD: f64 = 0.25;

pub const OUT_OF_SCOPE_MESSAGE: &str = "Essa pergunta vai além da minha capacidade.";
pub const CLARIFY_MESSAGE: &str = "Especifique melhor sua pergunta, por favor.";

/// Corpus size at which per-entry scoring fans out across the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;
