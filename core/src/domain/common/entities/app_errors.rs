use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// The generation service answered without any structured output.
    #[error("{0}")]
    NoResult(String),

    #[error("Response does not match schema: {0}")]
    SchemaValidation(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
