use std::num::ParseIntError;

use thiserror::Error;

/// Contract violations raised by [`super::RecordCollection`].
///
/// A lookup that simply finds nothing is never one of these. Missing ids,
/// duplicate inserts and out of range [`super::RecordCollection::try_get`]
/// calls are ordinary `bool`/`Option`/empty results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("invalid id '{input}': {source}")]
    InvalidId {
        input: String,
        source: ParseIntError,
    },

    #[error("invalid value '{input}': {source}")]
    InvalidValue {
        input: String,
        source: ParseIntError,
    },

    #[error("unknown column '{0}': expected one of id, value, name, description")]
    UnknownColumn(String),

    #[error("position {position} out of range; collection holds {size} record(s)")]
    OutOfRange { position: usize, size: usize },
}
