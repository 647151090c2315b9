//! Convenience result type alias for TuneHub.

use crate::error::AppError;

/// A specialized `Result` type for TuneHub operations.
pub type AppResult<T> = Result<T, AppError>;
