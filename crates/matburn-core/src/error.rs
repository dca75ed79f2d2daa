use thiserror::Error;

/// Failures of a single dashboard-to-service exchange.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("service answered {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
