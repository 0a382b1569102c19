//! Error handling for the lapse benchmark harness

use thiserror::Error;

/// Main error type for lapse operations
#[derive(Error, Debug)]
pub enum LapseError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Computation failure: {0}")]
    Computation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<csv::Error> for LapseError {
    fn from(err: csv::Error) -> Self {
        LapseError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for LapseError {
    fn from(err: serde_json::Error) -> Self {
        LapseError::Serialization(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LapseError>;

/// Result type alias for lapse operations (alias for Result)
pub type LapseResult<T> = std::result::Result<T, LapseError>;


/// Macro for creating invalid argument errors
#[macro_export]
macro_rules! invalid_argument_err {
    ($msg:expr) => {
        $crate::common::error::LapseError::InvalidArgument($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::LapseError::InvalidArgument(format!($fmt, $($arg)*))
    };
}

/// Macro for creating computation failure errors
#[macro_export]
macro_rules! computation_err {
    ($msg:expr) => {
        $crate::common::error::LapseError::Computation($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::LapseError::Computation(format!($fmt, $($arg)*))
    };
}
