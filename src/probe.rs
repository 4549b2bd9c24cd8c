//! Format detection from the first bytes of a file

use crate::error::Error;
use crate::raw::{HEADER_SIZE, Header};
use crate::read::name_exists;
use crate::types::ProbeResult;
use std::io::Cursor;

/// Decide from the header alone whether `data` looks like a package
///
/// `data` is the start of the file and `known_size` the total file size, if
/// known. Without a known size only the header itself is checked.
pub fn probe_header(data: &[u8], known_size: Option<u64>) -> ProbeResult {
    let header = match Header::parse(data) {
        Ok(header) => header,
        Err(Error::InsufficientData { available }) => {
            return if known_size.is_some_and(|size| size <= available as u64) {
                log::debug!("file is only {available} bytes, too short for a package header");
                ProbeResult::Failure
            } else {
                ProbeResult::NeedMoreData
            };
        }
        Err(err) => {
            log::debug!("not a package: {err}");
            return ProbeResult::Failure;
        }
    };

    let known_size = known_size.map(|size| size.max(data.len() as u64));
    if let Some(size) = known_size {
        let required = HEADER_SIZE as u64 + header.minimum_additional_file_size();
        if size < required {
            log::debug!("package needs at least {required} bytes, file has {size}");
            return ProbeResult::Failure;
        }
    }

    match header.validate(known_size) {
        Ok(()) => ProbeResult::Success,
        Err(err) => {
            log::debug!("not a package: {err}");
            ProbeResult::Failure
        }
    }
}

/// Probe `data` and, if `required_type` is given, check that the name table
/// contains it
///
/// The name lookup runs on `data` only. If the name table extends past the
/// end of `data` the verdict is [`ProbeResult::NeedMoreData`], unless
/// `known_size` says `data` already is the whole file.
pub fn probe(data: &[u8], known_size: Option<u64>, required_type: Option<&str>) -> ProbeResult {
    let verdict = probe_header(data, known_size);
    let Some(required_type) = required_type else {
        return verdict;
    };
    if !verdict.is_success() {
        return verdict;
    }

    // Header parsed successfully above
    let Ok(header) = Header::parse(data) else {
        return ProbeResult::Failure;
    };

    match name_exists(&mut Cursor::new(data), &header, required_type) {
        Ok(true) => ProbeResult::Success,
        Ok(false) => {
            log::debug!("name table does not contain {required_type:?}");
            ProbeResult::Failure
        }
        Err(err) if err.is_eof() => {
            if known_size.is_some_and(|size| size <= data.len() as u64) {
                ProbeResult::Failure
            } else {
                ProbeResult::NeedMoreData
            }
        }
        Err(err) => {
            log::debug!("failed to search name table: {err}");
            ProbeResult::Failure
        }
    }
}
