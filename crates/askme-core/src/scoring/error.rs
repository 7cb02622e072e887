use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    /// The caller sent an empty query. A client error, not a scoring outcome.
    #[error("query is empty")]
    EmptyQuery,

    #[error("corpus index contains no entries")]
    EmptyIndex,
}
