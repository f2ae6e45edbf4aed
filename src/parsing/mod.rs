//! Parsers for delimited reference and query files.

pub mod delimited;

pub use delimited::ParseError;
