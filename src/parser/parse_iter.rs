use log::debug;

use super::cursor::Cursor;
use super::parse_error::ParseError;
use super::parser::Parser;
use crate::sexp::Value;


/// Iterator over the successive expressions of one input.
///
/// Whitespace between expressions is skipped. Iteration ends at end of
/// input, or right after yielding the first error.
pub struct ParseIter<'a> {
    parser: Parser,
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> ParseIter<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_parser(input, Parser::default())
    }

    pub fn with_parser(input: &'a str, parser: Parser) -> Self {
        Self {
            parser,
            cursor: Cursor::new(input),
            done: false,
        }
    }

    /// Input not yet consumed.
    pub fn rest(&self) -> &'a str {
        self.cursor.rest()
    }
}

impl<'a> Iterator for ParseIter<'a> {
    type Item = Result<Value, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let start = self.cursor.skip_whitespace();
        if start.is_eof() {
            self.done = true;
            return None;
        }

        match self.parser.parse_at(start) {
            Ok((value, next)) => {
                self.cursor = next;
                Some(Ok(value))
            }
            Err(err) => {
                debug!("Stopping iteration: {}", err);
                self.cursor = start;
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
