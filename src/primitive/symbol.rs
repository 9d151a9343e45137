//! Lexical classes for atoms and character names.

/// Non-alphanumeric characters which may appear anywhere in an atom.
pub const SYMBOL_CHARS: &str = "!#$%&|*+-/:<=>?@^_~";

const NAMED_CHARS: [(&str, char); 2] = [("newline", '\n'), ("space", ' ')];


pub fn is_symbol_char(c: char) -> bool {
    SYMBOL_CHARS.contains(c)
}

/// Whether c can start an atom.
pub fn is_initial(c: char) -> bool {
    c.is_alphabetic() || is_symbol_char(c)
}

/// Whether c can continue an atom.
pub fn is_subsequent(c: char) -> bool {
    is_initial(c) || c.is_ascii_digit()
}

/// Case-insensitive lookup of a named character (`#\newline`, `#\space`).
pub fn named_char<S: AsRef<str>>(name: S) -> Option<char> {
    let folded = name.as_ref().to_lowercase();
    NAMED_CHARS
        .iter()
        .find(|(n, _)| *n == folded)
        .map(|(_, c)| *c)
}

/// Name used when rendering c as a character literal, if it has one.
pub fn char_name(c: char) -> Option<&'static str> {
    NAMED_CHARS.iter().find(|(_, n)| *n == c).map(|(name, _)| *name)
}
