//! Module for parsing text into Values.

pub mod cursor;
pub mod parse_error;

mod number;
mod parse_iter;
mod parser;

pub use self::cursor::{Cursor, Position};
pub use self::parse_error::{ParseError, ParseErrorReason};
pub use self::parse_iter::ParseIter;
pub use self::parser::{Parser, MAX_DEPTH};

use self::parse_error::Failure;
use crate::sexp::Value;


/// Outcome of a production: the parsed item and the Cursor following it.
pub(crate) type Parsed<'a, T> = Result<(T, Cursor<'a>), Failure>;

/// Parses one expression from the start of input with default limits.
///
/// Trailing input after the expression is ignored.
pub fn parse<S: AsRef<str>>(input: S) -> Result<Value, ParseError> {
    Parser::default().parse(input.as_ref())
}
