//! Conversions into Value, plus the list! constructor macro.

use num_bigint::BigInt;
use num_rational::BigRational;

use super::sexp::Value;
use crate::primitive::Complex;


/// Returns the elements as a Value::List.
///
/// Each element can be anything with an Into<Value> impl. Note that &str and
/// String convert to Value::String; use Value::atom for symbols.
#[macro_export]
macro_rules! list {
    ($($elem:expr),* $(,)?) => {
        $crate::sexp::Value::List(vec![$(<$crate::sexp::Value>::from($elem)),*])
    };
}


// Impl From<T> over the payload types.
macro_rules! value_from {
    ($($from:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$from> for Value {
                fn from(elem: $from) -> Self {
                    Value::$variant(elem)
                }
            }
        )+
    };
}

value_from!(
    BigInt => Integer,
    f64 => Float,
    Complex => Complex,
    BigRational => Rational,
    String => String,
    bool => Bool,
    char => Char,
);

impl From<i64> for Value {
    fn from(elem: i64) -> Self {
        Value::Integer(BigInt::from(elem))
    }
}

impl From<&str> for Value {
    fn from(elem: &str) -> Self {
        Value::String(elem.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        Value::List(vec.into_iter().map(Into::into).collect())
    }
}


#[cfg(test)]
#[path = "./sexp_conversion_test.rs"]
mod sexp_conversion_test;
