//! Query scoring and response routing.
//!
//! For each query, [`FaqRouter`] computes the four similarity signals against every indexed
//! question, blends them with fixed weights, picks the best entry (ties go to the lowest id)
//! and maps its score onto one of three bands:
//!
//! | best score        | reply                          |
//! |-------------------|--------------------------------|
//! | `> 0.60`          | the entry's stored answer      |
//! | `0.25 ..= 0.60`   | a request to clarify           |
//! | `< 0.25`          | an out-of-scope notice         |
//!
//! The confidence is always the best combined score, whichever band fires.

pub mod error;
pub mod router;
pub mod types;


pub use error::ScoringError;
pub use router::{FaqRouter, PreparedQuery, stable_argmax};
pub use types::{QueryResponse, RouteDecision, ScoredEntry, SignalScores};
