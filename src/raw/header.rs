use crate::error::{Error, Result};
use crate::raw::Layout;
use crate::raw::io::{read_u16, read_u32};
use crate::types::Table;
use std::io::{Cursor, Read};

/// Package magic bytes identifier (`C1 83 2A 9E` on disk).
pub const FILE_IDENTIFIER: u32 = 0x9E2A83C1;

/// Package header size in bytes.
pub const HEADER_SIZE: usize = 36;

/// Package header (first 36 bytes)
///
/// Describes where the name, export and import tables live. All fields are
/// stored little-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u16,
    pub license_mode: u16,
    pub flags: u32,
    pub name_count: u32,
    pub name_offset: u32,
    pub export_count: u32,
    pub export_offset: u32,
    pub import_count: u32,
    pub import_offset: u32,
}

impl Header {
    /// Read package header from current position
    ///
    /// Reads exactly 36 bytes and checks the magic bytes. No bounds checks
    /// are done here, see [`Header::validate`].
    ///
    /// # Arguments
    ///
    /// * `reader` - Must be positioned at byte 0 (start of file)
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let ident = read_u32(reader)?;
        if ident != FILE_IDENTIFIER {
            return Err(Error::InvalidMagicBytes);
        }

        Ok(Self {
            version: read_u16(reader)?,
            license_mode: read_u16(reader)?,
            flags: read_u32(reader)?,
            name_count: read_u32(reader)?,
            name_offset: read_u32(reader)?,
            export_count: read_u32(reader)?,
            export_offset: read_u32(reader)?,
            import_count: read_u32(reader)?,
            import_offset: read_u32(reader)?,
        })
    }

    /// Parse the header from the start of an in-memory buffer
    ///
    /// Fails with [`Error::InsufficientData`] if `data` is shorter than
    /// [`HEADER_SIZE`].
    pub fn parse(data: &[u8]) -> Result<Self> {
        let Some(bytes) = data.get(..HEADER_SIZE) else {
            return Err(Error::InsufficientData {
                available: data.len(),
            });
        };
        Self::read(&mut Cursor::new(bytes))
    }

    /// Entry layout used by this package's tables
    pub fn layout(&self) -> Layout {
        Layout::for_version(self.version)
    }

    /// `(table, count, offset)` for all three tables, in header order
    pub fn tables(&self) -> [(Table, u32, u32); 3] {
        [
            (Table::Names, self.name_count, self.name_offset),
            (Table::Exports, self.export_count, self.export_offset),
            (Table::Imports, self.import_count, self.import_offset),
        ]
    }

    /// Declared entry count and offset of `table`
    pub fn table(&self, table: Table) -> (u32, u32) {
        match table {
            Table::Names => (self.name_count, self.name_offset),
            Table::Exports => (self.export_count, self.export_offset),
            Table::Imports => (self.import_count, self.import_offset),
        }
    }

    /// Number of bytes the file needs beyond the header to hold the start of
    /// every table, assuming at least one byte per entry.
    pub fn minimum_additional_file_size(&self) -> u64 {
        self.tables()
            .iter()
            .map(|&(_, count, offset)| u64::from(offset) + u64::from(count))
            .max()
            .unwrap_or(0)
            .saturating_sub(HEADER_SIZE as u64)
    }

    /// Check the table locations against the header size and, if known, the
    /// file size
    ///
    /// Non-empty tables must start after the header. Every table has to end
    /// within the file.
    pub fn validate(&self, file_size: Option<u64>) -> Result<()> {
        for (table, count, offset) in self.tables() {
            let starts_in_header = count > 0 && (offset as usize) < HEADER_SIZE;
            let ends_past_file =
                file_size.is_some_and(|size| u64::from(offset) + u64::from(count) > size);

            if starts_in_header || ends_past_file {
                return Err(Error::TableOutOfBounds {
                    table,
                    offset,
                    count,
                    file_size: file_size.unwrap_or(0),
                });
            }
        }

        Ok(())
    }
}
