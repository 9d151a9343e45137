//! Recursive-descent grammar over Cursors.
//!
//! Every production takes a Cursor by value and returns the parsed Value
//! along with the Cursor following it. Ordinary failure is
//! Failure::Backtrack, so alternation is just "try the next production from
//! the same Cursor"; Failure::Abort is reserved for input that is malformed
//! no matter which alternative is chosen.

use log::trace;

use self::Production::*;
use super::cursor::Cursor;
use super::number;
use super::parse_error::{Failure, ParseError, ParseErrorReason};
use super::Parsed;
use crate::primitive::{is_initial, is_subsequent, named_char, unescape_char};
use crate::sexp::Value;

/// Default limit on nesting of lists, vectors and quotes.
pub const MAX_DEPTH: usize = 128;


#[derive(Clone, Copy, Debug)]
pub struct Parser {
    max_depth: usize,
}

/// Top-level alternatives.
#[derive(Clone, Copy, Debug)]
enum Production {
    Str,
    Vector,
    Atom,
    Character,
    Complex,
    Float,
    Rational,
    Integer,
    Quote,
    Quasiquote,
    Unquote,
    List,
}

// Order matters: the numeric alternatives share a digit prefix, and plain
// integer succeeds on a prefix of every other numeric literal.
const ALTERNATIVES: [Production; 12] = [
    Str, Vector, Atom, Character, Complex, Float, Rational, Integer, Quote, Quasiquote, Unquote,
    List,
];


impl Default for Parser {
    fn default() -> Self {
        Self::new(MAX_DEPTH)
    }
}

impl Parser {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses one expression from the start of input. Trailing input is
    /// left unconsumed.
    pub fn parse(&self, input: &str) -> Result<Value, ParseError> {
        self.parse_at(Cursor::new(input)).map(|(value, _)| value)
    }

    /// Parses one expression at cursor, also returning the Cursor after it.
    pub fn parse_at<'a>(&self, cursor: Cursor<'a>) -> Result<(Value, Cursor<'a>), ParseError> {
        self.expr(cursor, 0).map_err(Failure::into_error)
    }

    fn expr<'a>(&self, cursor: Cursor<'a>, depth: usize) -> Parsed<'a, Value> {
        if depth > self.max_depth {
            return Err(Failure::abort(
                &cursor,
                ParseErrorReason::DepthOverflow(self.max_depth),
            ));
        }

        let mut furthest: Option<ParseError> = None;
        for production in ALTERNATIVES.iter() {
            match self.apply(*production, cursor, depth) {
                Ok(done) => return Ok(done),
                Err(Failure::Backtrack(err)) => {
                    trace!("{:?} backtracked from {}", production, err.position());
                    furthest = Some(match furthest {
                        Some(prev) => prev.merge(err),
                        None => err,
                    });
                }
                Err(abort) => return Err(abort),
            }
        }

        // Listing every alternative that failed on the first char isn't useful.
        match furthest {
            Some(err) if err.position().offset > cursor.position().offset => {
                Err(Failure::Backtrack(err))
            }
            _ => Err(Failure::expected(&cursor, "expression")),
        }
    }

    fn apply<'a>(&self, production: Production, cursor: Cursor<'a>, depth: usize) -> Parsed<'a, Value> {
        match production {
            Str => self.string(cursor),
            Vector => self.vector(cursor, depth),
            Atom => self.atom(cursor),
            Character => self.character(cursor),
            Complex => number::complex(cursor),
            Float => number::float(cursor),
            Rational => number::rational(cursor),
            Integer => number::integer(cursor),
            Quote => self.quoted(cursor, depth, '\'', "quote"),
            Quasiquote => self.quoted(cursor, depth, '`', "quasiquote"),
            Unquote => self.quoted(cursor, depth, ',', "unquote"),
            List => self.list(cursor, depth),
        }
    }

    fn string<'a>(&self, cursor: Cursor<'a>) -> Parsed<'a, Value> {
        let mut c = cursor
            .eat('"')
            .ok_or_else(|| Failure::expected(&cursor, "\"\\\"\""))?;

        let mut s = String::new();
        loop {
            match c.bump() {
                Some(('"', next)) => return Ok((Value::String(s), next)),
                Some(('\\', escape)) => match escape.bump() {
                    Some((e, next)) => match unescape_char(e) {
                        Some(resolved) => {
                            s.push(resolved);
                            c = next;
                        }
                        None => {
                            return Err(Failure::abort(&escape, ParseErrorReason::UnknownEscape(e)))
                        }
                    },
                    None => return Err(Failure::expected(&escape, "escape character")),
                },
                Some((other, next)) => {
                    s.push(other);
                    c = next;
                }
                None => return Err(Failure::expected(&c, "closing \"\\\"\"")),
            }
        }
    }

    fn vector<'a>(&self, cursor: Cursor<'a>, depth: usize) -> Parsed<'a, Value> {
        let open = cursor
            .eat_str("#(")
            .ok_or_else(|| Failure::expected(&cursor, "\"#(\""))?;

        let (elems, after, err) = self.sequence(open.skip_whitespace(), depth)?;
        let close = after.skip_whitespace();
        match close.eat(')') {
            Some(next) => Ok((Value::vector(elems), next)),
            None => Err(Failure::Backtrack(
                err.merge(ParseError::expected(&close, "\")\"")),
            )),
        }
    }

    fn atom<'a>(&self, cursor: Cursor<'a>) -> Parsed<'a, Value> {
        match cursor.peek() {
            Some(c) if is_initial(c) => {}
            _ => return Err(Failure::expected(&cursor, "atom")),
        }

        let (token, next) = cursor.take_while(is_subsequent);
        match token {
            "#t" => Ok((Value::Bool(true), next)),
            "#f" => Ok((Value::Bool(false), next)),
            // Leave #\, #( and radix prefixes to their own productions.
            _ if token.starts_with('#') => Err(Failure::expected(&cursor, "#t or #f")),
            _ => Ok((Value::atom(token), next)),
        }
    }

    fn character<'a>(&self, cursor: Cursor<'a>) -> Parsed<'a, Value> {
        let start = cursor
            .eat_str("#\\")
            .ok_or_else(|| Failure::expected(&cursor, "\"#\\\\\""))?;

        let (name, next) = start.take_while(char::is_alphabetic);
        if name.is_empty() {
            return Err(Failure::expected(&start, "letter"));
        }
        if let Some(c) = named_char(name) {
            return Ok((Value::Char(c), next));
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok((Value::Char(c), next)),
            _ => Err(Failure::abort(
                &start,
                ParseErrorReason::UnknownCharName(name.to_string()),
            )),
        }
    }

    fn quoted<'a>(
        &self,
        cursor: Cursor<'a>,
        depth: usize,
        prefix: char,
        name: &'static str,
    ) -> Parsed<'a, Value> {
        let start = cursor
            .eat(prefix)
            .ok_or_else(|| Failure::expected(&cursor, format!("\"{}\"", prefix)))?;

        let (quoted, next) = self.expr(start, depth + 1)?;
        Ok((list!(Value::atom(name), quoted), next))
    }

    fn list<'a>(&self, cursor: Cursor<'a>, depth: usize) -> Parsed<'a, Value> {
        let open = cursor
            .eat('(')
            .ok_or_else(|| Failure::expected(&cursor, "\"(\""))?;

        let (elems, after, mut err) = self.sequence(open.skip_whitespace(), depth)?;
        if !elems.is_empty() {
            match self.dotted_tail(after, depth) {
                Ok((tail, next)) => return Ok((Value::DottedList(elems, Box::new(tail)), next)),
                Err(Failure::Backtrack(tail_err)) => err = err.merge(tail_err),
                Err(abort) => return Err(abort),
            }
        }

        let close = after.skip_whitespace();
        match close.eat(')') {
            Some(next) => Ok((Value::List(elems), next)),
            None => Err(Failure::Backtrack(
                err.merge(ParseError::expected(&close, "\")\"")),
            )),
        }
    }

    /// "." whitespace expr ")", following the head of a dotted list.
    fn dotted_tail<'a>(&self, after: Cursor<'a>, depth: usize) -> Parsed<'a, Value> {
        let dot = after.skip_whitespace();
        let c = dot.eat('.').ok_or_else(|| Failure::expected(&dot, "\".\""))?;

        let (space, c) = c.take_while(char::is_whitespace);
        if space.is_empty() {
            return Err(Failure::expected(&c, "whitespace"));
        }
        let (tail, c) = self.expr(c, depth + 1)?;

        let close = c.skip_whitespace();
        let next = close
            .eat(')')
            .ok_or_else(|| Failure::expected(&close, "\")\""))?;
        Ok((tail, next))
    }

    /// Zero or more expressions separated by whitespace.
    ///
    /// Returns the Cursor just past the last expression (before any trailing
    /// whitespace) and the error that ended the sequence, so callers can
    /// report it if their closing delimiter is missing too.
    fn sequence<'a>(
        &self,
        cursor: Cursor<'a>,
        depth: usize,
    ) -> Result<(Vec<Value>, Cursor<'a>, ParseError), Failure> {
        let mut elems = Vec::new();
        let mut end = cursor;
        let mut attempt = cursor;
        loop {
            match self.expr(attempt, depth + 1) {
                Ok((elem, next)) => {
                    elems.push(elem);
                    end = next;
                }
                Err(Failure::Backtrack(err)) => return Ok((elems, end, err)),
                Err(abort) => return Err(abort),
            }

            let (space, next) = end.take_while(char::is_whitespace);
            if space.is_empty() {
                return Ok((elems, end, ParseError::expected(&end, "whitespace")));
            }
            attempt = next;
        }
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
