//! Compact index codec
//!
//! Unreal packages store most table fields as "compact indices", a signed
//! variable-length integer of one to five bytes:
//!
//! ```text
//! byte 0:    S C x x x x x x    S = sign, C = continue, x = bits 0..6
//! byte 1-3:  C x x x x x x x    7 more magnitude bits each
//! byte 4:    x x x x x x x x    all 8 bits, no continuation flag
//! ```

use crate::error::{Error, Result};
use crate::raw::io::read_u8;
use std::io::{Read, Write};

/// Maximum number of bytes a compact index may occupy.
pub const MAX_COMPACT_INDEX_LEN: usize = 5;

const SIGN_BIT: u8 = 0x80;
const FIRST_CONTINUE_BIT: u8 = 0x40;
const FIRST_VALUE_MASK: u8 = 0x3F;
const CONTINUE_BIT: u8 = 0x80;
const VALUE_MASK: u8 = 0x7F;

/// Read a compact index from the current position
///
/// Consumes between one and five bytes. Fails with
/// [`Error::CompactIndexOverflow`] if the magnitude does not fit into an
/// `i32`, which includes a fifth byte with its top bit set. A sixth byte is
/// never read.
pub fn read_compact_index<R: Read>(reader: &mut R) -> Result<i32> {
    let first = read_u8(reader)?;
    let negative = first & SIGN_BIT != 0;
    let mut magnitude = u64::from(first & FIRST_VALUE_MASK);

    if first & FIRST_CONTINUE_BIT != 0 {
        let mut shift = 6;
        for position in 1..MAX_COMPACT_INDEX_LEN {
            let byte = read_u8(reader)?;

            if position == MAX_COMPACT_INDEX_LEN - 1 {
                magnitude |= u64::from(byte) << shift;
                break;
            }

            magnitude |= u64::from(byte & VALUE_MASK) << shift;
            if byte & CONTINUE_BIT == 0 {
                break;
            }
            shift += 7;
        }
    }

    // `-0` collapses to `0` here
    let value = if negative {
        -(magnitude as i64)
    } else {
        magnitude as i64
    };

    i32::try_from(value).map_err(|_| Error::CompactIndexOverflow)
}

/// Number of bytes [`write_compact_index`] emits for `value`
pub fn compact_index_len(value: i32) -> usize {
    let mut magnitude = value.unsigned_abs() >> 6;
    let mut len = 1;
    while magnitude > 0 && len < MAX_COMPACT_INDEX_LEN {
        magnitude >>= 7;
        len += 1;
    }
    len
}

/// Write `value` as a compact index and return the number of bytes written
pub fn write_compact_index<W: Write>(writer: &mut W, value: i32) -> std::io::Result<usize> {
    let mut buf = [0u8; MAX_COMPACT_INDEX_LEN];
    let len = compact_index_len(value);
    let mut magnitude = value.unsigned_abs();

    buf[0] = (magnitude as u8) & FIRST_VALUE_MASK;
    if value < 0 {
        buf[0] |= SIGN_BIT;
    }
    if len > 1 {
        buf[0] |= FIRST_CONTINUE_BIT;
    }
    magnitude >>= 6;

    for (position, byte) in buf.iter_mut().enumerate().take(len).skip(1) {
        if position == MAX_COMPACT_INDEX_LEN - 1 {
            *byte = magnitude as u8;
            break;
        }

        *byte = (magnitude as u8) & VALUE_MASK;
        if position + 1 < len {
            *byte |= CONTINUE_BIT;
        }
        magnitude >>= 7;
    }

    writer.write_all(&buf[..len])?;
    Ok(len)
}
