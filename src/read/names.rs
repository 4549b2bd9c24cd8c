use crate::error::Result;
use crate::raw::{Header, NameEntry};
use crate::read::TableIterator;
use std::io::{Read, Seek};

/// Iterator over the name table
pub type NameIterator<'a, R> = TableIterator<'a, R, NameEntry>;

/// Read the complete name table
///
/// Returns exactly `header.name_count` entries or an error.
pub fn read_name_table<R: Read + Seek>(reader: &mut R, header: &Header) -> Result<Vec<NameEntry>> {
    NameIterator::new(reader, header).collect_all()
}

/// Check whether `name` appears in the name table
///
/// Compares ASCII case-insensitively in index order and stops decoding at
/// the first match, so a table that is truncated after the match still
/// reports `true`.
pub fn name_exists<R: Read + Seek>(reader: &mut R, header: &Header, name: &str) -> Result<bool> {
    for entry in NameIterator::new(reader, header) {
        if entry?.matches(name) {
            return Ok(true);
        }
    }
    Ok(false)
}
