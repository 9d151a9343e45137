//! Module for representing S-exps.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use serde::{Deserialize, Serialize};

use crate::parser::{parse, ParseError};
use crate::primitive::{char_name, Complex};


/// A parsed S-exp.
///
/// Composite cases exclusively own their children; trees are only ever built
/// bottom-up, so no sharing or cycles are possible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Atom(String),
    List(Vec<Value>),
    /// Improper list: (head... . tail). Never collapsed into a List.
    DottedList(Vec<Value>, Box<Value>),
    /// Fixed-length once constructed.
    Vector(Box<[Value]>),
    Integer(BigInt),
    Float(f64),
    Complex(Complex),
    Rational(BigRational),
    String(String),
    Bool(bool),
    Char(char),
}

impl Value {
    pub fn atom<S: AsRef<str>>(name: S) -> Self {
        Value::Atom(name.as_ref().to_string())
    }

    pub fn vector(elems: Vec<Value>) -> Self {
        Value::Vector(elems.into_boxed_slice())
    }

    pub fn is_atom<S: AsRef<str>>(&self, name: S) -> bool {
        matches!(self, Value::Atom(a) if a == name.as_ref())
    }

    /// Name of this Value's case, as shown by EvalError::InvalidArgument.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Atom(_) => "atom",
            Value::List(_) => "list",
            Value::DottedList(..) => "dotted list",
            Value::Vector(_) => "vector",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Complex(_) => "complex",
            Value::Rational(_) => "rational",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
        }
    }
}


fn write_seq(f: &mut fmt::Formatter<'_>, elems: &[Value]) -> fmt::Result {
    let mut is_first = true;
    for elem in elems {
        if is_first {
            is_first = false;
        } else {
            write!(f, " ")?;
        }
        write!(f, "{}", elem)?;
    }
    Ok(())
}

/// Display is approximate: strings are not re-escaped and vectors print
/// like lists.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Atom(name) => write!(f, "{}", name),
            Value::List(elems) => {
                write!(f, "(")?;
                write_seq(f, elems)?;
                write!(f, ")")
            }
            Value::DottedList(head, tail) => {
                write!(f, "(")?;
                write_seq(f, head)?;
                write!(f, " . {})", tail)
            }
            Value::Vector(elems) => {
                write!(f, "(")?;
                write_seq(f, elems)?;
                write!(f, ")")
            }
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Complex(c) => write!(f, "{}", c),
            // Ratio's Display drops a denominator of 1.
            Value::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Bool(true) => write!(f, "#t"),
            Value::Bool(false) => write!(f, "#f"),
            Value::Char(c) => match char_name(*c) {
                Some(name) => write!(f, "#\\{}", name),
                None => write!(f, "#\\{}", c),
            },
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
