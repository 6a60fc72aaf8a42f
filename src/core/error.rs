use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EntryGateError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<config::ConfigError> for EntryGateError {
    fn from(err: config::ConfigError) -> Self {
        EntryGateError::ConfigParsingError(err.to_string())
    }
}
