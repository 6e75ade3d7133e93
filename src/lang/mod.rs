/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of TRS-80 Level I BASIC.

*/

#[macro_use]
mod error;
mod builtin;
mod lex;
mod line;
mod parse;

pub use builtin::Builtin;
pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use error::Legacy;
pub use lex::scan;
pub use line::Line;
pub use parse::parse;

pub mod ast;
pub mod token;

#[cfg(test)]
mod tests;

/// Line number of a stored program line. `None` is a direct (immediate) line.
pub type LineNumber = Option<u16>;

/// Character range within the statement text of a line.
pub type Column = std::ops::Range<usize>;

/// Highest line number accepted by the editor.
pub const MAX_LINE_NUMBER: u16 = 32767;
