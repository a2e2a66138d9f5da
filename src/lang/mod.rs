/*!
# Rust Language Module

This Rust module splits source text into numbered lines, classifies each
line by its keyword, and parses statements and their expressions.

Parsing here is pure. Nothing in this module knows about variables or
which line numbers exist; the machine does that after a statement parses.

*/

pub type LineNumber = Option<u32>;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod line;
mod parse;
mod word;

pub use error::Error;
pub use error::ErrorCode;
pub use error::Failure;
pub use error::NumberError;
pub use line::Line;
pub use parse::parse;
pub use parse::parse_expression;
pub use word::Word;

pub mod ast;

#[cfg(test)]
mod tests;
