use thiserror::Error;

/// Errors raised by timezone facilities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimezoneError {
    #[error("Local timezone could not be resolved: {0}")]
    Unresolvable(String),

    #[error("Unknown timezone identifier: {0}")]
    Unknown(String),
}

pub type TimezoneResult<T> = std::result::Result<T, TimezoneError>;
