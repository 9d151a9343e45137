use std::borrow::Cow;
use std::fmt;

use self::EvalError::*;
use self::ExpectedCount::*;
use crate::error::{Error, ErrorKind};
use crate::sexp::Value;


#[derive(Clone, Debug, PartialEq)]
pub enum EvalError {
    InvalidArgument {
        given: Value,
        expected: Cow<'static, str>,
    },
    InvalidSexp(Value),
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    UnboundSymbol(String),
    DivisionByZero(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}

impl EvalError {
    fn name(&self) -> &'static str {
        match self {
            InvalidArgument { .. } => "InvalidArgument",
            InvalidSexp(_) => "InvalidSexp",
            WrongArgumentCount { .. } => "WrongArgumentCount",
            UnboundSymbol(_) => "UnboundSymbol",
            DivisionByZero(_) => "DivisionByZero",
        }
    }
}


impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Eval Error] ")?;
        match self {
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {} ({}), expected {}",
                given,
                given.type_name(),
                expected
            ),
            InvalidSexp(val) => write!(f, "Invalid S-exp for evaluation: {}", val),
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            UnboundSymbol(symbol) => write!(f, "Unbound symbol: \"{}\"", symbol),
            DivisionByZero(op) => write!(f, "Division by zero in \"{}\"", op),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        };
    }
}

impl ErrorKind for EvalError {
    fn reify(&self) -> Value {
        list!(
            Value::atom("EvalError"),
            Value::atom(self.name()),
            self.to_string(),
        )
    }

    fn marker(&self) -> &'static str {
        "Eval error"
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::new(Box::new(err))
    }
}
