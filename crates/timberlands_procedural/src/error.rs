//! # Generation Error Types
//!
//! Every precondition violation in world generation is an
//! [`GenerationError::InvalidArgument`], reported at the call that received
//! the bad value. Nothing is retried or silently corrected.

use thiserror::Error;

/// Errors that can occur while building generation primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A constructor or helper received a value outside its contract.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// What the parameter must satisfy.
        reason: &'static str,
    },
}

impl GenerationError {
    /// Shorthand for [`GenerationError::InvalidArgument`].
    #[must_use]
    pub const fn invalid(argument: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { argument, reason }
    }
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
