use crate::error::Result;
use crate::raw::io::{read_u32, skip_bytes};
use crate::raw::{Layout, read_compact_index};
use crate::types::ObjectRef;
use std::io::Read;

/// Export table entry
///
/// Locates one serialized object inside the package. The super reference,
/// package reference and object flags are skipped while reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportEntry {
    /// Raw class reference (negative: import, positive: export, zero: none)
    pub class: i32,
    /// Name index of the object
    pub name: i32,
    /// Size of the serialized object in bytes
    pub size: i32,
    /// Absolute file offset of the serialized object, `0` when `size` is `0`
    pub offset: i32,
}

impl ExportEntry {
    /// Read an export table entry from the current position
    ///
    /// The offset is only stored for objects with a non-zero size. Offset and
    /// size are not checked against the file size.
    pub fn read<R: Read>(reader: &mut R, layout: &Layout) -> Result<Self> {
        let class = read_compact_index(reader)?;
        let _super = read_compact_index(reader)?;
        if layout.package_ref {
            let _package = read_u32(reader)?;
        }
        let name = read_compact_index(reader)?;
        skip_bytes(reader, 4)?; // object flags

        let size = read_compact_index(reader)?;
        let offset = if size != 0 {
            read_compact_index(reader)?
        } else {
            0
        };

        Ok(Self {
            class,
            name,
            size,
            offset,
        })
    }

    /// Decoded class reference
    pub fn class_ref(&self) -> ObjectRef {
        ObjectRef::from_raw(self.class)
    }
}
