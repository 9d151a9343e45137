//! Representation of primitive payloads and lexical helpers.

pub mod number;
pub mod string;
pub mod symbol;

pub use self::number::{Complex, Radix};
pub use self::string::unescape_char;
pub use self::symbol::{char_name, is_initial, is_subsequent, named_char};
