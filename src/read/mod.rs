//! Table readers
//!
//! Each reader seeks to the table offset declared in the header and decodes
//! exactly the declared number of entries. Running out of data before that
//! yields [`Error::Truncated`](crate::Error::Truncated); partial tables are
//! never returned.

mod exports;
mod imports;
mod names;
mod table;

pub use exports::{ExportIterator, read_export_table};
pub use imports::{ImportIterator, read_import_table};
pub use names::{NameIterator, name_exists, read_name_table};
pub use table::{TableEntry, TableIterator};
