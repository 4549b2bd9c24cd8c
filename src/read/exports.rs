use crate::error::Result;
use crate::raw::{ExportEntry, Header};
use crate::read::TableIterator;
use std::io::{Read, Seek};

/// Iterator over the export table
pub type ExportIterator<'a, R> = TableIterator<'a, R, ExportEntry>;

/// Read the complete export table
///
/// Payload extents are returned as stored; checking them against the file
/// size is left to whoever reads the payload.
pub fn read_export_table<R: Read + Seek>(
    reader: &mut R,
    header: &Header,
) -> Result<Vec<ExportEntry>> {
    ExportIterator::new(reader, header).collect_all()
}
