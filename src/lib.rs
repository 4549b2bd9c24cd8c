#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result, Warning};
pub use crate::probe::{probe, probe_header};
pub use crate::reader::{DEFAULT_MAX_TABLE_ENTRIES, ReaderOptions, UmxReader};
pub use crate::types::*;

mod error;
mod probe;
pub mod raw;
pub mod read;
mod reader;
mod types;
pub mod utils;
