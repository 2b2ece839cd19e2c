use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Length mismatch: {features} features, {query} query values, {matched} match values")]
    LengthMismatch {
        features: usize,
        query: usize,
        matched: usize,
    },

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Non-finite value for feature '{feature}' in track '{track}'")]
    NonFiniteFeature { track: String, feature: String },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
