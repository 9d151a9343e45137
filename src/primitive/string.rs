//! Escape handling for string literals.


/// Resolves the character following a backslash in a string literal.
///
/// Returns None for escapes the reader does not recognize.
pub fn unescape_char(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        _ => None,
    }
}
