//! This module defines the custom error types for the library.
//!
//! All failure modes of the Hankel operator are centralized into a single
//! enum: [`HankelErrorKind`], wrapped by the public [`HankelError`] type.
//!
//! Using the [`thiserror`] crate allows us to create idiomatic error types with
//! minimal boilerplate. The two failure classes differ in severity: an invalid
//! window is fatal to construction (no operator is produced), while a length
//! mismatch is a per-call error that leaves the operator fully usable.
use thiserror::Error;

/// Represents all possible errors that can occur while building or applying
/// a Hankel operator.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct HankelError(#[from] HankelErrorKind);

/// Private enum containing the distinct kinds of errors.
/// This separation allows for a clean `Display` implementation via [`thiserror`]
/// while keeping the public surface to a single opaque type.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum HankelErrorKind {
    /// Occurs at construction when the requested window length does not fit
    /// the series. Detected before any transform plan or buffer is allocated.
    #[error(
        "invalid window length {window}: must lie in [1, {series_len}] for a series of length {series_len}"
    )]
    InvalidWindow { window: usize, series_len: usize },

    /// Occurs at multiply time when the input vector length is inconsistent
    /// with the selected orientation's co-window size.
    #[error("invalid length of input vector 'v': expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

// Manually implement PartialEq for the public error type.
// We compare the inner `HankelErrorKind`.
impl PartialEq for HankelError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
