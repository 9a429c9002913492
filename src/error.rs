//! # error.rs
//!
//! Error type shared by the registry and function descriptors.
//!
//! Numeric domain problems (`sqrt(-1)`, `log(0)`, ...) are not errors here:
//! they propagate as NaN or infinity like the underlying `f64` operations.

use thiserror::Error;

/// Failure reported by a registry lookup or a checked invocation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FunctionError {
    /// No function is registered under the requested name.
    #[error("unknown function '{name}'")]
    NotFound { name: String },

    /// The number of supplied arguments differs from the function's arity.
    #[error("function '{name}' expects {expected} arguments, got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl FunctionError {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound { name: name.to_string() }
    }

    pub(crate) fn arity_mismatch(name: &str, expected: usize, found: usize) -> Self {
        Self::ArityMismatch { name: name.to_string(), expected, found }
    }
}

pub type Result<T> = std::result::Result<T, FunctionError>;
