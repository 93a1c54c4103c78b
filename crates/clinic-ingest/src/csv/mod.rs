//! Delimited-line parsing.

mod line;

pub use line::parse_line;
