//! Error handling for typex-inventory
//!
//! Wraps typex-core ExError with loader-specific helpers

use typex_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an inventory validation error
pub fn inventory_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("inventory_validate")
        .with_message(reason.to_string())
}

/// Create a parse error from serde_yaml::Error
pub fn from_yaml(err: serde_yaml::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("inventory_parse")
        .with_message(format!("YAML parse error: {}", err))
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
