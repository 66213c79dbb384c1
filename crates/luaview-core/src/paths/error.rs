//! Path-related error types.
//!
//! Path computation itself never fails; these errors only come from parsing
//! values that were read back from disk or handed over by the host.

use thiserror::Error;

/// Errors that can occur while parsing path components.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A script URI was empty where a content address was required.
    #[error("Script URI cannot be empty")]
    EmptyUri,

    /// A string was not a valid content address.
    #[error("{0:?} is not a valid content address (expected 32 lowercase hex characters)")]
    InvalidContentAddress(String),
}
