//! Result type alias for Modlog

use super::errors::ModlogError;

/// Result type alias for Modlog operations
///
/// This is a convenience type alias that uses `ModlogError` as the error type.
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, ModlogError>;
