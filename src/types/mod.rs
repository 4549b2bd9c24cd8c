mod enums;
mod package;

pub use enums::*;
pub use package::*;
