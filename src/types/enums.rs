use std::fmt;

/// The three tables described by the package header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Names,
    Exports,
    Imports,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Table::Names => "name",
            Table::Exports => "export",
            Table::Imports => "import",
        })
    }
}

/// Verdict of [`probe`](crate::probe())
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    /// Header is structurally valid and the file is large enough
    Success,
    /// Not enough bytes were available to decide; retry with more data
    NeedMoreData,
    /// Definitely not a usable package
    Failure,
}

impl ProbeResult {
    pub fn is_success(self) -> bool {
        self == ProbeResult::Success
    }
}

/// Reference from an export's class field, decoded from its sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectRef {
    /// `0`: no object, e.g. the export is a class itself
    Null,
    /// Positive values point into the export table (`value - 1`)
    Export(usize),
    /// Negative values point into the import table (`-value - 1`)
    Import(usize),
}

impl ObjectRef {
    pub fn from_raw(value: i32) -> Self {
        match value {
            0 => ObjectRef::Null,
            v if v > 0 => ObjectRef::Export((v - 1) as usize),
            v => ObjectRef::Import((-(v as i64) - 1) as usize),
        }
    }
}
