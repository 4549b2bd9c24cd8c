//! Little-endian primitive readers shared by the entry decoders
//!
//! Unreal packages store every fixed-width integer little-endian, so unlike
//! formats with a per-file byte order there is nothing to dispatch on here.

use crate::error::Result;
use std::io::Read;

/// Read u8
pub fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read little-endian u16
pub fn read_u16<R: Read>(reader: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

/// Read little-endian u32
pub fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read little-endian i32
pub fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// Read fixed-length byte array
///
/// The buffer grows as data arrives, so a corrupt length cannot make us
/// allocate more than the source actually holds.
pub fn read_bytes<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(4096));
    let read = reader.take(len as u64).read_to_end(&mut buf)?;
    if read < len {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

/// Skip `len` bytes
pub fn skip_bytes<R: Read>(reader: &mut R, len: u64) -> Result<()> {
    let skipped = std::io::copy(&mut reader.take(len), &mut std::io::sink())?;
    if skipped < len {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use claims::{assert_matches, assert_ok_eq};
    use std::io::Cursor;

    #[test]
    fn test_read_u16() {
        let mut cursor = Cursor::new([0x34, 0x12]);
        assert_ok_eq!(read_u16(&mut cursor), 0x1234);
    }

    #[test]
    fn test_read_u32() {
        let mut cursor = Cursor::new([0x78, 0x56, 0x34, 0x12]);
        assert_ok_eq!(read_u32(&mut cursor), 0x12345678);
    }

    #[test]
    fn test_read_i32() {
        let mut cursor = Cursor::new((-2i32).to_le_bytes());
        assert_ok_eq!(read_i32(&mut cursor), -2);
    }

    #[test]
    fn test_read_bytes() {
        let mut cursor = Cursor::new(b"Hello World");
        assert_ok_eq!(read_bytes(&mut cursor, 5), b"Hello".to_vec());
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_read_bytes_short() {
        let mut cursor = Cursor::new(b"Hi");
        let err = read_bytes(&mut cursor, 1_000_000).unwrap_err();
        assert!(err.is_eof());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_skip_bytes() {
        let mut cursor = Cursor::new([1, 2, 3, 4, 5]);
        skip_bytes(&mut cursor, 4).unwrap();
        assert_ok_eq!(read_u8(&mut cursor), 5);
        assert_matches!(skip_bytes(&mut cursor, 1), Err(Error::IoError(_)));
    }
}
