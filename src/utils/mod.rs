mod byte_string;

pub use byte_string::ByteString;
