//! Immutable position within parser input.
//!
//! A Cursor is Copy and never mutated in place: every step returns a new
//! Cursor. Productions that fail simply drop what they advanced to, which
//! leaves the caller's Cursor exactly where it was.

use std::fmt;

use serde::{Deserialize, Serialize};


/// Location of a char within the input. Line and col are 1-based.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Position {
    /// Offset in chars from the start of input.
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor<'a> {
    input: &'a str,
    // Byte index into input; always on a char boundary.
    index: usize,
    position: Position,
}


impl Position {
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            index: 0,
            position: Position::start(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.index..]
    }

    pub fn is_eof(&self) -> bool {
        self.index >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the next char and the Cursor after it.
    pub fn bump(&self) -> Option<(char, Cursor<'a>)> {
        let c = self.peek()?;
        let mut next = *self;
        next.index += c.len_utf8();
        next.position.offset += 1;
        if c == '\n' {
            next.position.line += 1;
            next.position.col = 1;
        } else {
            next.position.col += 1;
        }
        Some((c, next))
    }

    pub fn eat(&self, expected: char) -> Option<Cursor<'a>> {
        match self.bump() {
            Some((c, next)) if c == expected => Some(next),
            _ => None,
        }
    }

    pub fn eat_str(&self, expected: &str) -> Option<Cursor<'a>> {
        let mut cursor = *self;
        for c in expected.chars() {
            cursor = cursor.eat(c)?;
        }
        Some(cursor)
    }

    /// Consumes the longest run of chars matching pred (possibly empty).
    pub fn take_while<P: Fn(char) -> bool>(&self, pred: P) -> (&'a str, Cursor<'a>) {
        let mut cursor = *self;
        while let Some((c, next)) = cursor.bump() {
            if !pred(c) {
                break;
            }
            cursor = next;
        }
        (self.slice_to(&cursor), cursor)
    }

    pub fn skip_whitespace(&self) -> Cursor<'a> {
        self.take_while(char::is_whitespace).1
    }

    /// Input between this Cursor and a later one.
    pub fn slice_to(&self, end: &Cursor<'a>) -> &'a str {
        &self.input[self.index..end.index]
    }
}


impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_tracks_lines() {
        let cursor = Cursor::new("a\nb");
        let (a, cursor) = cursor.bump().unwrap();
        let (nl, cursor) = cursor.bump().unwrap();
        assert_eq!((a, nl), ('a', '\n'));
        assert_eq!(
            cursor.position(),
            Position {
                offset: 2,
                line: 2,
                col: 1
            }
        );
        let (_, cursor) = cursor.bump().unwrap();
        assert!(cursor.is_eof());
        assert_eq!(cursor.bump(), None);
    }

    #[test]
    fn default_position_is_start() {
        let position = Position::default();
        assert_eq!(position, Position::start());
        assert_eq!((position.line, position.col), (1, 1));
        assert_eq!(Cursor::new("").position(), position);
    }

    #[test]
    fn failed_eat_leaves_original() {
        let start = Cursor::new("#(1)");
        assert_eq!(start.eat_str("#\\"), None);
        assert_eq!(start.position(), Position::start());

        let after = start.eat_str("#(").unwrap();
        assert_eq!(after.rest(), "1)");
    }

    #[test]
    fn take_while_multibyte() {
        let cursor = Cursor::new("λx 1");
        let (word, next) = cursor.take_while(char::is_alphabetic);
        assert_eq!(word, "λx");
        assert_eq!(next.position().offset, 2);
        assert_eq!(next.skip_whitespace().rest(), "1");
    }
}
