use thiserror::Error;

/// A failed store call. `Display` is the bare message so callers can relay
/// it verbatim.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// The store could not be reached or the request could not be built.
    #[error("{0}")]
    Request(String),
    /// The store answered with an error.
    #[error("{0}")]
    Query(String),
    /// The store answered with rows of an unexpected shape.
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Request(err.to_string())
    }
}
