//! Content addresses derived from script URIs.
//!
//! An address is the lowercase hex MD5 digest of the URI's UTF-8 bytes. It is
//! used both as the per-resource directory name and as the bundle file stem,
//! so it must stay byte-identical across calls and process restarts.

use std::fmt;
use std::str::FromStr;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use super::error::PathError;

/// Number of hex characters in a content address (128-bit digest).
pub const ADDRESS_LEN: usize = 32;

/// Deterministic, hash-derived identifier for a script URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentAddress(String);

impl ContentAddress {
    /// Compute the address of `uri`.
    ///
    /// Any string is accepted, including the empty one. Callers that need to
    /// reject empty URIs should use [`ContentAddress::for_uri_checked`].
    pub fn for_uri(uri: &str) -> Self {
        let digest = Md5::digest(uri.as_bytes());
        Self(format!("{digest:x}"))
    }

    /// Compute the address of `uri`, rejecting empty input.
    pub fn for_uri_checked(uri: &str) -> Result<Self, PathError> {
        if uri.is_empty() {
            return Err(PathError::EmptyUri);
        }
        Ok(Self::for_uri(uri))
    }

    /// The address as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_address(s: &str) -> bool {
    s.len() == ADDRESS_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

impl FromStr for ContentAddress {
    type Err = PathError;

    /// Parse an address read back from disk, e.g. a per-resource folder name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_address(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(PathError::InvalidContentAddress(s.to_string()))
        }
    }
}

impl TryFrom<String> for ContentAddress {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_address(&value) {
            Ok(Self(value))
        } else {
            Err(PathError::InvalidContentAddress(value))
        }
    }
}

impl From<ContentAddress> for String {
    fn from(address: ContentAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for ContentAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
