/// First package version whose name entries carry a trailing flags word.
pub const NAME_FLAGS_VERSION: u16 = 64;

/// First package version whose name strings use a fixed 32-bit length prefix
/// instead of a compact index.
///
/// Chosen cut-off: every Unreal 1 and Unreal Tournament package (versions
/// 61 to 69) uses compact prefixes, and this crate does not target anything
/// newer, so the exact version where the format changed is not pinned down.
pub const FIXED_NAME_LENGTH_VERSION: u16 = 300;

/// First package version whose import and export entries carry a `u32`
/// package reference.
pub const PACKAGE_REF_VERSION: u16 = 60;

/// How the length of a name string is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLength {
    /// Compact index prefix
    Compact,
    /// Little-endian `i32` prefix
    Fixed32,
}

/// Version-dependent table entry layout
///
/// Derived once from the package version and handed to every entry decoder,
/// so the version checks live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub name_length: NameLength,
    pub name_flags: bool,
    /// Import and export entries carry a `u32` package reference
    pub package_ref: bool,
}

impl Layout {
    pub fn for_version(version: u16) -> Self {
        Self {
            name_length: if version >= FIXED_NAME_LENGTH_VERSION {
                NameLength::Fixed32
            } else {
                NameLength::Compact
            },
            name_flags: version >= NAME_FLAGS_VERSION,
            package_ref: version >= PACKAGE_REF_VERSION,
        }
    }
}
