use thiserror::Error;

/// Failures while acquiring article text from a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch the page: {0}")]
    Request(String),

    #[error("Server responded with HTTP {0}")]
    Status(u16),

    #[error("No article text could be extracted from the page")]
    EmptyDocument,
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Request(error.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(error: url::ParseError) -> Self {
        FetchError::InvalidUrl(error.to_string())
    }
}

/// Failures while producing a summary, extractive or abstractive.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Text is too short to summarize")]
    TooShort,

    #[error("Unknown summarization strategy: {0}")]
    UnknownStrategy(String),

    #[error("Abstractive model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Model request failed: {0}")]
    Api(String),

    #[error("Model returned an empty summary")]
    EmptyModelOutput,
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Api(error.to_string())
    }
}
