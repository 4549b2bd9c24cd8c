use crate::types::Table;
use std::io;

/// Unrecoverable parsing errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid magic bytes in header (expected C1 83 2A 9E)")]
    InvalidMagicBytes,

    #[error("Not enough data for the package header ({available} of 36 bytes)")]
    InsufficientData { available: usize },

    #[error(
        "{table} table at offset {offset} with {count} entries does not fit a file of {file_size} bytes"
    )]
    TableOutOfBounds {
        table: Table,
        offset: u32,
        count: u32,
        file_size: u64,
    },

    #[error("{table} table truncated after {decoded} of {expected} entries")]
    Truncated {
        table: Table,
        decoded: usize,
        expected: u32,
    },

    #[error("{table} table index {index} out of range (table has {len} entries)")]
    OutOfRangeReference { table: Table, index: i32, len: usize },

    #[error("Compact index does not fit into 32 bits")]
    CompactIndexOverflow,

    #[error("Object payload at offset {offset} with size {size} lies outside the file ({file_size} bytes)")]
    PayloadOutOfBounds {
        offset: i32,
        size: i32,
        file_size: u64,
    },

    #[error("{table} table declares {count} entries (limit is {limit})")]
    TableTooLarge { table: Table, count: u32, limit: u32 },

    #[error("Required name {0:?} not found in name table")]
    MissingRequiredName(String),
}

impl Error {
    /// Turn an end-of-file I/O error hit while decoding a table into
    /// [`Error::Truncated`], leaving every other error untouched.
    pub(crate) fn truncated(self, table: Table, decoded: usize, expected: u32) -> Self {
        match self {
            Error::IoError(ref e) if e.kind() == io::ErrorKind::UnexpectedEof => Error::Truncated {
                table,
                decoded,
                expected,
            },
            other => other,
        }
    }

    /// Returns `true` if the error means the source ended too early.
    pub fn is_eof(&self) -> bool {
        match self {
            Error::IoError(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            Error::Truncated { .. } | Error::InsufficientData { .. } => true,
            _ => false,
        }
    }
}

/// Non-fatal issues encountered during lenient parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Table entry refers to a name index that is not in the name table
    NameIndexOutOfRange {
        table: Table,
        entry: usize,
        index: i32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
