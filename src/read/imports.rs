use crate::error::{Result, Warning};
use crate::raw::{Header, ImportEntry, NameEntry};
use crate::read::TableIterator;
use crate::types::Table;
use std::io::{Read, Seek};

/// Iterator over the import table
pub type ImportIterator<'a, R> = TableIterator<'a, R, ImportEntry>;

/// Read the import table, reduced to each entry's object name index
///
/// Indices are returned as stored. Indices that do not point into `names`
/// are reported through `warnings` but kept, so positions still line up with
/// the class references of export entries.
pub fn read_import_table<R: Read + Seek>(
    reader: &mut R,
    header: &Header,
    names: &[NameEntry],
    warnings: &mut Vec<Warning>,
) -> Result<Vec<i32>> {
    let entries = ImportIterator::new(reader, header).collect_all()?;

    let mut object_names = Vec::with_capacity(entries.len());
    for (entry, import) in entries.iter().enumerate() {
        let index = import.object_name;
        if usize::try_from(index).map_or(true, |i| i >= names.len()) {
            warnings.push(Warning::NameIndexOutOfRange {
                table: Table::Imports,
                entry,
                index,
            });
        }
        object_names.push(index);
    }

    Ok(object_names)
}
