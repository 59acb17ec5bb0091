//! Error types for delegate invocation
//!
//! Binding mistakes (wrong signature, stateful callables) are rejected at
//! compile time and never show up here. The only runtime condition is
//! invoking a delegate that has nothing bound.

use core::fmt;

/// Result type for checked delegate operations
pub type DelegateResult<T> = Result<T, DelegateError>;

/// Errors reported by checked delegate operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DelegateError {
    /// No function is bound (never connected, or reset)
    Empty,
}

impl fmt::Display for DelegateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelegateError::Empty => write!(f, "delegate is empty"),
        }
    }
}

impl std::error::Error for DelegateError {}
