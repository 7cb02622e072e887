use thiserror::Error;

use crate::vectorizer::VectorizerError;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to fit vector-space model: {0}")]
    Fit(#[from] VectorizerError),
}
