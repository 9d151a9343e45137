//! Reader for a Scheme-like S-exp syntax.
//!
//! Text is parsed into a [`Value`](sexp::Value) tree, which can then be
//! rendered back to text and optionally reduced through a small table of
//! integer primitives.
//!
//! Note that this crate does *not* set up logging; clients should take care
//! of that prior to calling into it. See:
//!   https://github.com/rust-lang/log#in-executables.

use log::debug;

use crate::error::Error;
use crate::parser::Parser;
use crate::sexp::Value;


#[macro_use]
pub mod error;
#[macro_use]
pub mod sexp;

pub mod builtins;
pub mod eval_error;
pub mod parser;
pub mod primitive;
pub mod reducer;

pub mod prelude {
    pub use crate::error::{Error, ErrorKind};
    pub use crate::eval_error::{EvalError, ExpectedCount};
    pub use crate::parser::{parse, ParseError, ParseErrorReason, ParseIter, Parser};
    pub use crate::primitive::Complex;
    pub use crate::reducer::reduce;
    pub use crate::sexp::Value;
    pub use crate::{eval_and_render, parse_and_render, read_expr, ReadOptions};
    // Macros.
    pub use crate::{err, list};
}


/// Options for read_expr.
///
/// The Default is the parser-only behavior of parse_and_render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadOptions {
    /// Maximum nesting of lists, vectors and quotes.
    pub max_depth: usize,
    /// Whether to reduce the parsed Value before returning it.
    pub evaluate: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_depth: parser::MAX_DEPTH,
            evaluate: false,
        }
    }
}

/// Reads one expression from the start of input, reducing it if requested.
pub fn read_expr<S: AsRef<str>>(input: S, options: &ReadOptions) -> Result<Value, Error> {
    let value = Parser::new(options.max_depth).parse(input.as_ref())?;
    if options.evaluate {
        reducer::reduce(value)
    } else {
        Ok(value)
    }
}

/// Parses one expression and renders it back to text.
///
/// Never fails: a parse failure renders as "No match: " followed by the
/// error description.
pub fn parse_and_render<S: AsRef<str>>(input: S) -> String {
    render(read_expr(input, &ReadOptions::default()))
}

/// Like parse_and_render, but renders the reduced expression. Reduction
/// failures render as "Eval error: " followed by the error description.
pub fn eval_and_render<S: AsRef<str>>(input: S) -> String {
    let options = ReadOptions {
        evaluate: true,
        ..Default::default()
    };
    render(read_expr(input, &options))
}

fn render(result: Result<Value, Error>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => {
            debug!("Rendering failure {:?}", err);
            format!("{}: {}", err.kind().marker(), err)
        }
    }
}
