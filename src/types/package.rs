use crate::error::{Error, Result};
use crate::raw::{ExportEntry, Header, NameEntry};
use crate::types::{ObjectRef, Table};

/// Decoded package tables
///
/// Produced by [`UmxReader::read_package`](crate::UmxReader::read_package).
/// Indices stored in the tables are resolved on demand and out-of-range
/// references are reported as [`Error::OutOfRangeReference`].
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub header: Header,
    pub names: Vec<NameEntry>,
    /// Object name index of every import table entry
    pub imports: Vec<i32>,
    pub exports: Vec<ExportEntry>,
}

/// An exported object with its names resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedObject {
    pub name: String,
    /// `None` if the object has no class, i.e. it is a class itself
    pub class: Option<String>,
    pub offset: i32,
    pub size: i32,
}

impl Package {
    /// Name table entry at `index`
    pub fn name(&self, index: i32) -> Result<&NameEntry> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.names.get(i))
            .ok_or(Error::OutOfRangeReference {
                table: Table::Names,
                index,
                len: self.names.len(),
            })
    }

    /// First export whose name matches `name` (ASCII case-insensitive)
    pub fn find_export(&self, name: &str) -> Option<&ExportEntry> {
        self.exports
            .iter()
            .find(|export| self.name(export.name).is_ok_and(|n| n.matches(name)))
    }

    /// Name of the class of `export`
    ///
    /// Import references resolve to the import's object name, export
    /// references to the name of that export.
    pub fn class_name(&self, export: &ExportEntry) -> Result<Option<&NameEntry>> {
        let name_index = match export.class_ref() {
            ObjectRef::Null => return Ok(None),
            ObjectRef::Import(index) => {
                *self
                    .imports
                    .get(index)
                    .ok_or_else(|| out_of_range(Table::Imports, export.class, self.imports.len()))?
            }
            ObjectRef::Export(index) => {
                self.exports
                    .get(index)
                    .ok_or_else(|| out_of_range(Table::Exports, export.class, self.exports.len()))?
                    .name
            }
        };

        self.name(name_index).map(Some)
    }

    /// Resolve names of a single export
    pub fn object(&self, export: &ExportEntry) -> Result<EmbeddedObject> {
        Ok(EmbeddedObject {
            name: self.name(export.name)?.name.decode().into_owned(),
            class: self
                .class_name(export)?
                .map(|class| class.name.decode().into_owned()),
            offset: export.offset,
            size: export.size,
        })
    }

    /// All exports with their names resolved
    pub fn objects(&self) -> Result<Vec<EmbeddedObject>> {
        self.exports.iter().map(|export| self.object(export)).collect()
    }

    /// Exports whose class name matches `class` (ASCII case-insensitive)
    ///
    /// Exports with unresolvable references are skipped.
    pub fn exports_of_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = &'a ExportEntry> + 'a {
        self.exports.iter().filter(move |export| {
            matches!(self.class_name(export), Ok(Some(name)) if name.matches(class))
        })
    }
}

fn out_of_range(table: Table, raw: i32, len: usize) -> Error {
    Error::OutOfRangeReference {
        table,
        index: raw,
        len,
    }
}
