use crate::error::Result;
use crate::raw::io::{read_i32, read_u32};
use crate::raw::{Layout, NameLength, read_compact_index};
use crate::utils::ByteString;
use std::io::Read;

/// Name table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    /// Name without its NUL terminator (raw bytes, not decoded)
    pub name: ByteString,
    /// Object flags, only stored by packages with [`Layout::name_flags`]
    pub flags: Option<u32>,
}

impl NameEntry {
    /// Read a name table entry from the current position
    ///
    /// The stored length counts the terminator. Non-positive lengths produce
    /// an empty name.
    pub fn read<R: Read>(reader: &mut R, layout: &Layout) -> Result<Self> {
        let len = match layout.name_length {
            NameLength::Compact => read_compact_index(reader)?,
            NameLength::Fixed32 => read_i32(reader)?,
        };

        let name = if len > 0 {
            ByteString::read(reader, len as usize)?.trim_nul()
        } else {
            ByteString::default()
        };

        let flags = if layout.name_flags {
            Some(read_u32(reader)?)
        } else {
            None
        };

        Ok(Self { name, flags })
    }

    /// ASCII case-insensitive comparison against `name`
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::write_compact_index;
    use claims::assert_err;
    use insta::assert_debug_snapshot;
    use std::io::Cursor;

    const UT_LAYOUT: Layout = Layout {
        name_length: NameLength::Compact,
        name_flags: true,
        package_ref: true,
    };

    #[test]
    fn read_compact_name_with_flags() {
        let mut data = Vec::new();
        write_compact_index(&mut data, 6).unwrap();
        data.extend_from_slice(b"Music\0");
        data.extend_from_slice(&0x0007_0010u32.to_le_bytes());

        let mut cursor = Cursor::new(data);
        let entry = NameEntry::read(&mut cursor, &UT_LAYOUT).unwrap();
        assert_debug_snapshot!(entry, @r#"
        NameEntry {
            name: "Music",
            flags: Some(
                458768,
            ),
        }
        "#);
        assert_eq!(cursor.position(), 11);
    }

    #[test]
    fn read_name_without_flags() {
        let layout = Layout {
            name_flags: false,
            ..UT_LAYOUT
        };
        let mut cursor = Cursor::new(b"\x05Wave\0trailing".to_vec());
        let entry = NameEntry::read(&mut cursor, &layout).unwrap();
        assert_eq!(entry.name.as_bytes(), b"Wave");
        assert_eq!(entry.flags, None);
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn read_fixed_length_name() {
        let layout = Layout {
            name_length: NameLength::Fixed32,
            ..UT_LAYOUT
        };
        let mut data = 5i32.to_le_bytes().to_vec();
        data.extend_from_slice(b"None\0");
        data.extend_from_slice(&0u32.to_le_bytes());

        let mut cursor = Cursor::new(data);
        let entry = NameEntry::read(&mut cursor, &layout).unwrap();
        assert_eq!(entry.name.as_bytes(), b"None");
        assert_eq!(entry.flags, Some(0));
    }

    #[test]
    fn negative_length_is_empty() {
        let mut data = Vec::new();
        write_compact_index(&mut data, -4).unwrap();
        data.extend_from_slice(&0u32.to_le_bytes());

        let entry = NameEntry::read(&mut Cursor::new(data), &UT_LAYOUT).unwrap();
        assert!(entry.name.is_empty());
    }

    #[test]
    fn case_insensitive_match() {
        let entry = NameEntry {
            name: ByteString::from("Song01"),
            flags: None,
        };
        assert!(entry.matches("song01"));
        assert!(entry.matches("SONG01"));
        assert!(!entry.matches("Song02"));
    }

    #[test]
    fn truncated_string() {
        let mut cursor = Cursor::new(b"\x0APartial".to_vec());
        let err = assert_err!(NameEntry::read(&mut cursor, &UT_LAYOUT));
        assert!(err.is_eof());
    }
}
