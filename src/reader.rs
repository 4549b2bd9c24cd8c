//! High-level package reader

use crate::error::{Error, Result, Warning};
use crate::raw::{ExportEntry, HEADER_SIZE, Header, Layout, NameEntry};
use crate::read::{
    ExportIterator, name_exists, read_export_table, read_import_table, read_name_table,
};
use crate::types::{Package, Table};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Default limit for the number of entries in a single table
pub const DEFAULT_MAX_TABLE_ENTRIES: u32 = 1 << 20;

/// Options for [`UmxReader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    required_type: Option<String>,
    max_table_entries: u32,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            required_type: None,
            max_table_entries: DEFAULT_MAX_TABLE_ENTRIES,
        }
    }
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `name` (e.g. `"music"`) to be present in the name table
    ///
    /// Returns `self` to allow method chaining.
    pub fn with_required_type(mut self, name: impl Into<String>) -> Self {
        self.required_type = Some(name.into());
        self
    }

    /// Reject packages declaring more than `limit` entries in any table
    ///
    /// Default is [`DEFAULT_MAX_TABLE_ENTRIES`]. Returns `self` to allow
    /// method chaining.
    pub fn with_max_table_entries(mut self, limit: u32) -> Self {
        self.max_table_entries = limit;
        self
    }

    pub fn required_type(&self) -> Option<&str> {
        self.required_type.as_deref()
    }

    pub fn max_table_entries(&self) -> u32 {
        self.max_table_entries
    }
}

/// High-level package reader
///
/// Validates the header against the file size up front, then decodes the
/// tables on request and extracts object payloads.
///
/// # Example
///
/// ```no_run
/// use unreal_umx::{ReaderOptions, UmxReader};
///
/// let options = ReaderOptions::new().with_required_type("music");
/// let mut reader = UmxReader::from_path_with_options("Title.umx", options)?;
///
/// let mut warnings = Vec::new();
/// let package = reader.read_package(&mut warnings)?;
/// for export in package.exports_of_class("music") {
///     let data = reader.read_object(export)?;
///     println!("{}: {} bytes", package.name(export.name)?.name, data.len());
/// }
/// # Ok::<(), unreal_umx::Error>(())
/// ```
#[derive(Debug)]
pub struct UmxReader<R: Read + Seek> {
    reader: BufReader<R>,
    header: Header,
    file_size: u64,
    options: ReaderOptions,
}

impl UmxReader<File> {
    /// Create a reader from a file path
    ///
    /// Opens the file and reads the header immediately to validate format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_options(path, ReaderOptions::default())
    }

    /// Like [`UmxReader::from_path`] with custom options
    pub fn from_path_with_options<P: AsRef<Path>>(path: P, options: ReaderOptions) -> Result<Self> {
        let file = File::open(path)?;
        Self::with_options(file, options)
    }
}

impl<R: Read + Seek> UmxReader<R> {
    /// Create a reader from any `Read + Seek` source
    ///
    /// Reads the header immediately to validate the format.
    pub fn new(reader: R) -> Result<Self> {
        Self::with_options(reader, ReaderOptions::default())
    }

    /// Create a reader with custom options
    pub fn with_options(mut reader: R, options: ReaderOptions) -> Result<Self> {
        let file_size = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        if file_size < HEADER_SIZE as u64 {
            return Err(Error::InsufficientData {
                available: file_size as usize,
            });
        }

        let header = Header::read(&mut reader)?;
        header.validate(Some(file_size)).inspect_err(|err| {
            log::debug!("rejecting package header: {err}");
        })?;

        for (table, count, _) in header.tables() {
            if count > options.max_table_entries {
                return Err(Error::TableTooLarge {
                    table,
                    count,
                    limit: options.max_table_entries,
                });
            }
        }

        log::debug!(
            "package version {} with {} names, {} imports, {} exports",
            header.version,
            header.name_count,
            header.import_count,
            header.export_count
        );

        Ok(Self {
            reader: BufReader::new(reader),
            header,
            file_size,
            options,
        })
    }

    /// Get reference to the parsed header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Total size of the underlying source in bytes
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn layout(&self) -> Layout {
        self.header.layout()
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Check whether `name` appears in the name table (ASCII case-insensitive)
    pub fn name_exists(&mut self, name: &str) -> Result<bool> {
        name_exists(&mut self.reader, &self.header, name)
    }

    pub fn read_names(&mut self) -> Result<Vec<NameEntry>> {
        read_name_table(&mut self.reader, &self.header)
    }

    /// Read the import table, reduced to object name indices
    pub fn read_imports(
        &mut self,
        names: &[NameEntry],
        warnings: &mut Vec<Warning>,
    ) -> Result<Vec<i32>> {
        read_import_table(&mut self.reader, &self.header, names, warnings)
    }

    pub fn read_exports(&mut self) -> Result<Vec<ExportEntry>> {
        read_export_table(&mut self.reader, &self.header)
    }

    /// Create iterator over the export table
    ///
    /// Entries are only decoded when `.next()` is called.
    pub fn exports(&mut self) -> ExportIterator<'_, BufReader<R>> {
        ExportIterator::new(&mut self.reader, &self.header)
    }

    /// Decode all three tables
    ///
    /// Fails with [`Error::MissingRequiredName`] if the options name a
    /// required type that the name table does not contain.
    pub fn read_package(&mut self, warnings: &mut Vec<Warning>) -> Result<Package> {
        let names = self.read_names()?;

        if let Some(required) = self.options.required_type() {
            if !names.iter().any(|entry| entry.matches(required)) {
                return Err(Error::MissingRequiredName(required.to_string()));
            }
        }

        let imports = self.read_imports(&names, warnings)?;
        let exports = self.read_exports()?;

        for (entry, export) in exports.iter().enumerate() {
            if usize::try_from(export.name).map_or(true, |i| i >= names.len()) {
                warnings.push(Warning::NameIndexOutOfRange {
                    table: Table::Exports,
                    entry,
                    index: export.name,
                });
            }
        }

        Ok(Package {
            header: self.header.clone(),
            names,
            imports,
            exports,
        })
    }

    /// Read the serialized payload of `export`
    ///
    /// Fails with [`Error::PayloadOutOfBounds`] if the payload does not lie
    /// within the file.
    pub fn read_object(&mut self, export: &ExportEntry) -> Result<Vec<u8>> {
        let out_of_bounds = || Error::PayloadOutOfBounds {
            offset: export.offset,
            size: export.size,
            file_size: self.file_size,
        };

        let offset = u64::try_from(export.offset).map_err(|_| out_of_bounds())?;
        let size = u64::try_from(export.size).map_err(|_| out_of_bounds())?;
        if offset + size > self.file_size {
            return Err(out_of_bounds());
        }

        self.reader.seek(SeekFrom::Start(offset))?;
        crate::raw::io::read_bytes(&mut self.reader, size as usize)
    }

    /// Look up an export by name and read its payload
    pub fn find_object(&mut self, package: &Package, name: &str) -> Result<Option<Vec<u8>>> {
        match package.find_export(name) {
            Some(export) => self.read_object(export).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{header_bytes, sample_header};
    use claims::{assert_matches, assert_ok};
    use std::io::Cursor;

    #[test]
    fn default_options() {
        let options = ReaderOptions::default();
        assert_eq!(options.required_type(), None);
        assert_eq!(options.max_table_entries(), DEFAULT_MAX_TABLE_ENTRIES);
    }

    #[test]
    fn chained_options() {
        let options = ReaderOptions::new()
            .with_required_type("music")
            .with_max_table_entries(16);
        assert_eq!(options.required_type(), Some("music"));
        assert_eq!(options.max_table_entries(), 16);
    }

    #[test]
    fn file_too_small_for_header() {
        let data = header_bytes(&sample_header());
        let result = UmxReader::new(Cursor::new(&data[..30]));
        assert_matches!(result, Err(Error::InsufficientData { available: 30 }));
    }

    #[test]
    fn tables_must_fit_file() {
        let mut data = header_bytes(&sample_header());
        data.resize(70, 0);
        let result = UmxReader::new(Cursor::new(data));
        assert_matches!(
            result,
            Err(Error::TableOutOfBounds {
                table: Table::Imports,
                file_size: 70,
                ..
            })
        );
    }

    #[test]
    fn table_limit() {
        let mut data = header_bytes(&sample_header());
        data.resize(100, 0);
        assert_ok!(UmxReader::new(Cursor::new(data.clone())));

        let options = ReaderOptions::new().with_max_table_entries(1);
        let result = UmxReader::with_options(Cursor::new(data), options);
        assert_matches!(
            result,
            Err(Error::TableTooLarge {
                table: Table::Names,
                count: 2,
                limit: 1
            })
        );
    }

    #[test]
    fn payload_bounds() {
        let mut data = header_bytes(&sample_header());
        data.resize(100, 0xAB);
        let mut reader = UmxReader::new(Cursor::new(data)).unwrap();
        assert_eq!(reader.file_size(), 100);

        let export = |offset, size| ExportEntry {
            class: 0,
            name: 0,
            offset,
            size,
        };

        assert_eq!(reader.read_object(&export(90, 10)).unwrap(), vec![0xAB; 10]);
        assert_eq!(reader.read_object(&export(0, 0)).unwrap(), Vec::<u8>::new());
        assert_matches!(
            reader.read_object(&export(90, 11)),
            Err(Error::PayloadOutOfBounds { offset: 90, size: 11, file_size: 100 })
        );
        assert_matches!(
            reader.read_object(&export(-1, 4)),
            Err(Error::PayloadOutOfBounds { .. })
        );
        assert_matches!(
            reader.read_object(&export(4, -4)),
            Err(Error::PayloadOutOfBounds { .. })
        );
    }
}
