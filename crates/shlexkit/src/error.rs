//! Error types for shlexkit.

use thiserror::Error;

/// Result type used throughout shlexkit.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the name-keyed lookups.
///
/// Classification itself cannot fail: unrecognized raw text maps to
/// [`crate::WordbreakKind::Unknown`]. Only parsing an external
/// WORDBREAK_* name back into a kind is fallible.
#[derive(Error, Debug)]
pub enum Error {
    /// A name that is not one of the fixed WORDBREAK_* names
    #[error("unknown wordbreak kind name: {0}")]
    UnknownKindName(String),
}
