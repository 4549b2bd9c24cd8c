use std::borrow::Cow;
use std::fmt;
use std::io::Read;

/// Wrapper around `Vec<u8>` that provides human-readable debug output
///
/// Package names are narrow, 8-bit strings with no declared encoding. The
/// debug output shows printable ASCII verbatim and escapes everything else.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Create a new `ByteString` from a byte vector
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Read `len` bytes from reader and return as `ByteString`
    pub fn read<R: Read>(reader: &mut R, len: usize) -> crate::error::Result<Self> {
        crate::raw::io::read_bytes(reader, len).map(Self)
    }

    /// Get a reference to the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert into the underlying byte vector
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove a trailing NUL terminator, if any
    pub fn trim_nul(mut self) -> Self {
        if let Some(pos) = self.0.iter().position(|&b| b == 0) {
            self.0.truncate(pos);
        }
        self
    }

    /// ASCII case-insensitive comparison against `name`
    pub fn eq_ignore_ascii_case(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name.as_bytes())
    }

    /// Decode raw bytes to string
    ///
    /// Attempts UTF-8 decoding first, falling back to Windows-1252 (CP1252),
    /// which is what the tools that produce these packages write.
    ///
    /// # Returns
    ///
    /// Decoded string (always succeeds with some valid string)
    pub fn decode(&self) -> Cow<'_, str> {
        match str::from_utf8(&self.0) {
            Ok(s) => s.into(),
            Err(_) => encoding_rs::WINDOWS_1252.decode(&self.0).0,
        }
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for ByteString {
    fn from(str: &str) -> Self {
        Self(str.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) => write!(f, "{:?}", s),
            Err(_) => {
                // Show as hex if not valid UTF-8
                write!(f, "b\"")?;
                for &byte in &self.0 {
                    if byte.is_ascii_graphic() || byte == b' ' {
                        write!(f, "{}", byte as char)?;
                    } else {
                        write!(f, "\\x{:02x}", byte)?;
                    }
                }
                write!(f, "\"")
            }
        }
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}
