//! Catalog error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure while building the catalog from packaged resources.
///
/// The archive and the extra-oil files ship with the crate, so any of these
/// indicates a packaging bug rather than a runtime condition; callers are not
/// expected to recover.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The compressed archive stream could not be read or decompressed
    #[error("failed to decompress oil archive")]
    ArchiveDecompress(#[source] std::io::Error),

    /// The decompressed archive is not a valid JSON array of oil records
    #[error("failed to parse oil archive JSON")]
    ArchiveParse(#[source] serde_json::Error),

    /// The extra oils directory could not be enumerated
    #[error("failed to read extra oils directory {path}")]
    ExtraDirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An extra oil file could not be read
    #[error("failed to read extra oil file {path}")]
    ExtraRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An extra oil file is not a valid flat attributes object
    #[error("failed to parse extra oil file {path}")]
    ExtraParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An extra oil file lacks a field the merge step requires
    #[error("extra oil file {path} is missing required field `{field}`")]
    ExtraMissingField { path: PathBuf, field: &'static str },

    /// A Norwegian record has no reference year to append to its name
    #[error("oil {id} has no reference year for name normalization")]
    MissingReferenceYear { id: String },

    /// Two records share an id, which would make id lookup ambiguous
    #[error("duplicate oil id in catalog: {id}")]
    DuplicateId { id: String },
}

/// A lookup matched no record. Carries the requested key for diagnostics.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("no oil found with name: {0}")]
    Name(String),

    #[error("no oil found with id: {0}")]
    Id(String),
}
