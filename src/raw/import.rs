use crate::error::Result;
use crate::raw::io::read_u32;
use crate::raw::{Layout, read_compact_index};
use std::io::Read;

/// Import table entry
///
/// Identifies an object defined in another package purely by name; nothing
/// here is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportEntry {
    /// Name index of the package that defines the class
    pub class_package: i32,
    /// Name index of the class
    pub class_name: i32,
    /// Raw package reference, absent in packages before
    /// [`PACKAGE_REF_VERSION`](crate::raw::PACKAGE_REF_VERSION)
    pub package: Option<u32>,
    /// Name index of the imported object
    pub object_name: i32,
}

impl ImportEntry {
    /// Read an import table entry from the current position
    pub fn read<R: Read>(reader: &mut R, layout: &Layout) -> Result<Self> {
        let class_package = read_compact_index(reader)?;
        let class_name = read_compact_index(reader)?;
        let package = if layout.package_ref {
            Some(read_u32(reader)?)
        } else {
            None
        };

        Ok(Self {
            class_package,
            class_name,
            package,
            object_name: read_compact_index(reader)?,
        })
    }
}
