use thiserror::Error;

/// Errors that can occur before a search runs.
///
/// A search that finds nothing is not an error: every `locate*` entry point
/// reports absence as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
