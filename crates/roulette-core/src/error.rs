use thiserror::Error;

/// Errors from parsing user-supplied facet names.
#[derive(Debug, Error)]
pub enum RouletteError {
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("unknown media type: {0}")]
    UnknownMediaType(String),
}
