//! Fixed table of primitive integer operations.

use lazy_static::lazy_static;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::error::Error;
use crate::eval_error::{EvalError, ExpectedCount};
use crate::sexp::Value;


pub type Args = Vec<Value>;
type BinOp = fn(&'static str, BigInt, &BigInt) -> Result<BigInt, EvalError>;

macro_rules! builtins {
    [$($n:tt : $x:expr),+ $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($n, BuiltIn { name: $n, op: $x });
            )+
            m
        }
    };
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "+": add,
        "-": sub,
        "*": mul,
        "/": div,
        "mod": modulo,
        "quotient": quotient,
        "remainder": remainder,
    ];
}

#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    op: BinOp,
}

pub fn lookup(name: &str) -> Option<&'static BuiltIn> {
    BUILTINS.get(name)
}


impl BuiltIn {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Left fold of the operation over the Integer payloads of args.
    pub fn call(&self, args: Args) -> Result<Value, Error> {
        let mut ints = args.into_iter().map(|arg| match arg {
            Value::Integer(i) => Ok(i),
            other => Err(EvalError::InvalidArgument {
                given: other,
                expected: Cow::Borrowed("an integer"),
            }),
        });

        let mut curr = match ints.next() {
            Some(first) => first?,
            None => {
                return err!(EvalError::WrongArgumentCount {
                    given: 0,
                    expected: ExpectedCount::AtLeast(1),
                })
            }
        };
        for i in ints {
            curr = (self.op)(self.name, curr, &i?)?;
        }
        Ok(Value::Integer(curr))
    }
}

impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} @ {:p}]", self.name, &self.op)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


fn nonzero(name: &'static str, divisor: &BigInt) -> Result<(), EvalError> {
    if divisor.is_zero() {
        Err(EvalError::DivisionByZero(name))
    } else {
        Ok(())
    }
}

fn add(_: &'static str, a: BigInt, b: &BigInt) -> Result<BigInt, EvalError> {
    Ok(a + b)
}

fn sub(_: &'static str, a: BigInt, b: &BigInt) -> Result<BigInt, EvalError> {
    Ok(a - b)
}

fn mul(_: &'static str, a: BigInt, b: &BigInt) -> Result<BigInt, EvalError> {
    Ok(a * b)
}

// Floored, like mod.
fn div(name: &'static str, a: BigInt, b: &BigInt) -> Result<BigInt, EvalError> {
    nonzero(name, b)?;
    Ok(a.div_floor(b))
}

fn modulo(name: &'static str, a: BigInt, b: &BigInt) -> Result<BigInt, EvalError> {
    nonzero(name, b)?;
    Ok(a.mod_floor(b))
}

// Truncated, like remainder.
fn quotient(name: &'static str, a: BigInt, b: &BigInt) -> Result<BigInt, EvalError> {
    nonzero(name, b)?;
    Ok(a / b)
}

fn remainder(name: &'static str, a: BigInt, b: &BigInt) -> Result<BigInt, EvalError> {
    nonzero(name, b)?;
    Ok(a % b)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn fold(name: &str, args: Vec<i64>) -> Result<Value, Error> {
        lookup(name)
            .unwrap()
            .call(args.into_iter().map(Value::from).collect())
    }

    #[test]
    fn table() {
        for name in &["+", "-", "*", "/", "mod", "quotient", "remainder"] {
            assert_eq!(lookup(name).unwrap().name(), *name);
        }
        assert!(lookup("bogus").is_none());
        assert!(lookup("quote").is_none());
    }

    #[test]
    fn left_fold() {
        assert_eq!(fold("+", vec![1, 2, 3]).unwrap(), 6.into());
        assert_eq!(fold("-", vec![10, 3, 2]).unwrap(), 5.into());
        assert_eq!(fold("-", vec![5]).unwrap(), 5.into());
        assert_eq!(fold("*", vec![2, 3, 4]).unwrap(), 24.into());
        assert_eq!(fold("/", vec![100, 5, 2]).unwrap(), 10.into());
    }

    #[test]
    fn floored_and_truncated() {
        assert_eq!(fold("/", vec![-7, 2]).unwrap(), (-4).into());
        assert_eq!(fold("mod", vec![-7, 2]).unwrap(), 1.into());
        assert_eq!(fold("quotient", vec![-7, 2]).unwrap(), (-3).into());
        assert_eq!(fold("remainder", vec![-7, 2]).unwrap(), (-1).into());
    }

    #[test]
    fn division_by_zero() {
        let err = fold("mod", vec![1, 0]).unwrap_err();
        assert_eq!(err, Error::from(EvalError::DivisionByZero("mod")));
    }

    #[test]
    fn no_arguments() {
        let err = fold("+", vec![]).unwrap_err();
        assert_eq!(
            err,
            Error::from(EvalError::WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            })
        );
    }

    #[test]
    fn non_integer_argument() {
        let err = lookup("+")
            .unwrap()
            .call(vec![1.into(), Value::Float(2.0)])
            .unwrap_err();
        assert_eq!(
            err,
            Error::from(EvalError::InvalidArgument {
                given: Value::Float(2.0),
                expected: Cow::Borrowed("an integer"),
            })
        );
    }
}
