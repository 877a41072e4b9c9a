use thiserror::Error;
use worldclocks_ports::TimezoneError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Clock element has no timezone attribute")]
    MissingTimezone,

    #[error("No async runtime available to drive the clock timer")]
    NoRuntime,
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<TimezoneError> for EngineError {
    fn from(err: TimezoneError) -> Self {
        match err {
            TimezoneError::Unknown(id) | TimezoneError::Unresolvable(id) => {
                EngineError::UnknownTimezone(id)
            }
        }
    }
}
