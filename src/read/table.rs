use crate::error::Result;
use crate::raw::{ExportEntry, Header, ImportEntry, Layout, NameEntry};
use crate::types::Table;
use std::io::{Read, Seek, SeekFrom};
use std::marker::PhantomData;

/// Upper bound for up-front allocations; counts come from untrusted headers.
const MAX_PREALLOCATED_ENTRIES: usize = 1024;

/// An entry type stored in one of the package tables
pub trait TableEntry: Sized {
    const TABLE: Table;

    fn read<R: Read>(reader: &mut R, layout: &Layout) -> Result<Self>;
}

impl TableEntry for NameEntry {
    const TABLE: Table = Table::Names;

    fn read<R: Read>(reader: &mut R, layout: &Layout) -> Result<Self> {
        NameEntry::read(reader, layout)
    }
}

impl TableEntry for ImportEntry {
    const TABLE: Table = Table::Imports;

    fn read<R: Read>(reader: &mut R, layout: &Layout) -> Result<Self> {
        ImportEntry::read(reader, layout)
    }
}

impl TableEntry for ExportEntry {
    const TABLE: Table = Table::Exports;

    fn read<R: Read>(reader: &mut R, layout: &Layout) -> Result<Self> {
        ExportEntry::read(reader, layout)
    }
}

/// Iterator that lazily decodes the entries of one table
///
/// Seeks to the table on the first call to `next()`. After the first error
/// the iterator is exhausted.
pub struct TableIterator<'a, R, E> {
    reader: &'a mut R,
    layout: Layout,
    offset: u32,
    expected: u32,
    decoded: usize,
    started: bool,
    failed: bool,
    _entry: PhantomData<E>,
}

impl<'a, R: Read + Seek, E: TableEntry> TableIterator<'a, R, E> {
    /// Create new iterator over the table `E` lives in
    pub fn new(reader: &'a mut R, header: &Header) -> Self {
        let (expected, offset) = header.table(E::TABLE);
        Self {
            reader,
            layout: header.layout(),
            offset,
            expected,
            decoded: 0,
            started: false,
            failed: false,
            _entry: PhantomData,
        }
    }

    /// Number of entries decoded so far
    pub fn decoded(&self) -> usize {
        self.decoded
    }

    fn remaining(&self) -> usize {
        if self.failed {
            return 0;
        }
        (self.expected as usize).saturating_sub(self.decoded)
    }

    fn fail(&mut self, err: crate::Error) -> Option<Result<E>> {
        let err = err.truncated(E::TABLE, self.decoded, self.expected);
        self.failed = true;
        Some(Err(err))
    }

    /// Decode all remaining entries
    ///
    /// Any failure discards what was decoded so far.
    pub fn collect_all(self) -> Result<Vec<E>> {
        let mut entries = Vec::with_capacity(self.remaining().min(MAX_PREALLOCATED_ENTRIES));
        for entry in self {
            entries.push(entry?);
        }
        Ok(entries)
    }
}

impl<R: Read + Seek, E: TableEntry> Iterator for TableIterator<'_, R, E> {
    type Item = Result<E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        if !self.started {
            self.started = true;
            log::trace!(
                "reading {} {} table entries at offset {}",
                self.expected,
                E::TABLE,
                self.offset
            );
            if let Err(e) = self.reader.seek(SeekFrom::Start(u64::from(self.offset))) {
                return self.fail(e.into());
            }
        }

        match E::read(self.reader, &self.layout) {
            Ok(entry) => {
                self.decoded += 1;
                Some(Ok(entry))
            }
            Err(e) => self.fail(e),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}
