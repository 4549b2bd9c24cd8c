//! Low-level package parsing functions
//!
//! This module provides direct access to package components with minimal
//! transformation. All functions read from the current cursor position
//! without seeking. Users must manage file positioning themselves.

mod compact_index;
mod export;
mod header;
mod import;
pub(crate) mod io;
mod layout;
mod name;

pub use self::compact_index::{
    MAX_COMPACT_INDEX_LEN, compact_index_len, read_compact_index, write_compact_index,
};
pub use self::export::ExportEntry;
pub use self::header::{FILE_IDENTIFIER, HEADER_SIZE, Header};
pub use self::import::ImportEntry;
pub use self::layout::{
    FIXED_NAME_LENGTH_VERSION, Layout, NAME_FLAGS_VERSION, NameLength, PACKAGE_REF_VERSION,
};
pub use self::name::NameEntry;

#[cfg(test)]
pub(crate) use self::header::tests::{header_bytes, sample_header};
