use std::borrow::Cow;
use std::fmt;

use derive_getters::Getters;

use self::ParseErrorReason::*;
use super::cursor::{Cursor, Position};
use crate::error::{Error, ErrorKind};
use crate::sexp::Value;


#[derive(Clone, Debug, Getters, PartialEq)]
pub struct ParseError {
    position: Position,
    /// Char found at position; None at end of input.
    found: Option<char>,
    reason: ParseErrorReason,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorReason {
    /// Productions which could have continued the parse at this position.
    Expected(Vec<Cow<'static, str>>),
    DepthOverflow(usize),
    ZeroDenominator,
    FloatOutOfRange,
    UnknownCharName(String),
    UnknownEscape(char),
}

/// Result of a failed production.
///
/// Backtrack lets the enclosing alternation try its next option; Abort
/// propagates straight out of parse().
#[derive(Debug)]
pub(crate) enum Failure {
    Backtrack(ParseError),
    Abort(ParseError),
}


impl ParseError {
    pub(crate) fn new(cursor: &Cursor, reason: ParseErrorReason) -> Self {
        Self {
            position: cursor.position(),
            found: cursor.peek(),
            reason,
        }
    }

    pub(crate) fn expected<S: Into<Cow<'static, str>>>(cursor: &Cursor, what: S) -> Self {
        Self::new(cursor, Expected(vec![what.into()]))
    }

    /// Keeps whichever error got further into the input. Expectations at the
    /// same position are combined.
    pub(crate) fn merge(self, other: ParseError) -> ParseError {
        if other.position > self.position {
            return other;
        }
        if other.position < self.position {
            return self;
        }

        match (self.reason, other.reason) {
            (Expected(mut mine), Expected(theirs)) => {
                for what in theirs {
                    if !mine.contains(&what) {
                        mine.push(what);
                    }
                }
                ParseError {
                    position: self.position,
                    found: self.found,
                    reason: Expected(mine),
                }
            }
            (Expected(_), reason) | (reason, _) => ParseError {
                position: self.position,
                found: self.found,
                reason,
            },
        }
    }
}

impl Failure {
    pub(crate) fn expected<S: Into<Cow<'static, str>>>(cursor: &Cursor, what: S) -> Self {
        Failure::Backtrack(ParseError::expected(cursor, what))
    }

    pub(crate) fn abort(cursor: &Cursor, reason: ParseErrorReason) -> Self {
        Failure::Abort(ParseError::new(cursor, reason))
    }

    pub(crate) fn into_error(self) -> ParseError {
        match self {
            Failure::Backtrack(err) | Failure::Abort(err) => err,
        }
    }
}


impl fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected(options) => {
                write!(f, "expected ")?;
                let len = options.len();
                for (i, what) in options.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", if i + 1 == len { " or " } else { ", " })?;
                    }
                    write!(f, "{}", what)?;
                }
                Ok(())
            }
            DepthOverflow(max) => write!(f, "nesting deeper than {}", max),
            ZeroDenominator => write!(f, "rational with zero denominator"),
            FloatOutOfRange => write!(f, "number too large for a float"),
            UnknownCharName(name) => write!(f, "unknown character name \"{}\"", name),
            UnknownEscape(c) => write!(f, "unknown escape \"\\{}\"", c),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Parse Error] {}: ", self.position)?;
        match self.found {
            Some(c) => write!(f, "unexpected {:?}; ", c)?,
            None => write!(f, "unexpected end of input; ")?,
        }
        write!(f, "{}", self.reason)
    }
}

impl ErrorKind for ParseError {
    fn reify(&self) -> Value {
        list!(
            Value::atom("ParseError"),
            self.position.line as i64,
            self.position.col as i64,
            self.reason.to_string(),
        )
    }

    fn marker(&self) -> &'static str {
        "No match"
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::new(Box::new(err))
    }
}
