use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

/// Why a single source produced nothing usable for a run.
///
/// Never leaves the source client: it is logged and collapsed into
/// [`SourceResult::Absent`](crate::domain::values::source_result::SourceResult).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Network, timeout, non-success status or undecodable body.
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// The source answered but had no usable records.
    #[error("No data: {0}")]
    NoData(String),
}
