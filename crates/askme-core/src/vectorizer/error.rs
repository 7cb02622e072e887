use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizerError {
    #[error("cannot fit a vectorizer on zero documents")]
    NoDocuments,

    #[error("empty vocabulary: none of the {documents} documents contain a term")]
    EmptyVocabulary { documents: usize },
}
