//! Numeric sub-grammars.
//!
//! Complex, float and rational literals all start with the same digit run
//! as a plain integer, so each is attempted speculatively before integer.

use num_rational::BigRational;
use num_traits::Zero;

use super::cursor::Cursor;
use super::parse_error::{Failure, ParseErrorReason};
use super::Parsed;
use crate::primitive::{Complex, Radix};
use crate::sexp::Value;


fn decimal_digits<'a>(cursor: Cursor<'a>) -> Parsed<'a, &'a str> {
    let (digits, next) = cursor.take_while(|c| c.is_ascii_digit());
    if digits.is_empty() {
        return Err(Failure::expected(&cursor, "digit"));
    }
    Ok((digits, next))
}

fn expect<'a>(cursor: Cursor<'a>, c: char, what: &'static str) -> Result<Cursor<'a>, Failure> {
    cursor.eat(c).ok_or_else(|| Failure::expected(&cursor, what))
}

/// digits "." digits, with digits mandatory on both sides.
fn float_literal(cursor: Cursor) -> Parsed<f64> {
    let (_, c) = decimal_digits(cursor)?;
    let c = expect(c, '.', "\".\"")?;
    let (_, end) = decimal_digits(c)?;
    match cursor.slice_to(&end).parse::<f64>() {
        Ok(x) => Ok((x, end)),
        Err(_) => Err(Failure::expected(&cursor, "float")),
    }
}

/// Real or imaginary component of a complex literal; float takes priority.
fn real_part(cursor: Cursor) -> Parsed<f64> {
    let float_err = match float_literal(cursor) {
        Ok(done) => return Ok(done),
        Err(Failure::Backtrack(err)) => err,
        Err(abort) => return Err(abort),
    };

    let (digits, next) = decimal_digits(cursor).map_err(|failure| match failure {
        Failure::Backtrack(err) => Failure::Backtrack(float_err.merge(err)),
        abort => abort,
    })?;
    match digits.parse::<f64>() {
        Ok(x) => Ok((x, next)),
        Err(_) => Err(Failure::expected(&cursor, "number")),
    }
}

pub(super) fn complex(cursor: Cursor) -> Parsed<Value> {
    let (re, c) = real_part(cursor)?;
    let c = expect(c, '+', "\"+\"")?;
    let (im, c) = real_part(c)?;
    let c = expect(c, 'i', "\"i\"")?;
    finite(&cursor, re)?;
    finite(&cursor, im)?;
    Ok((Value::Complex(Complex::new(re, im)), c))
}

pub(super) fn float(cursor: Cursor) -> Parsed<Value> {
    let (x, next) = float_literal(cursor)?;
    finite(&cursor, x)?;
    Ok((Value::Float(x), next))
}

/// Only checked once a whole literal has matched, so that an oversized
/// integer can still fall through to the integer production.
fn finite(start: &Cursor, x: f64) -> Result<(), Failure> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(Failure::abort(start, ParseErrorReason::FloatOutOfRange))
    }
}

/// digits "/" digits. Both runs must be non-empty so that "1/" falls back
/// to a plain integer; a zero denominator is a hard failure.
pub(super) fn rational(cursor: Cursor) -> Parsed<Value> {
    let (numer, c) = decimal_digits(cursor)?;
    let c = expect(c, '/', "\"/\"")?;
    let (denom, end) = decimal_digits(c)?;

    let denom = Radix::Decimal.accumulate(denom);
    if denom.is_zero() {
        return Err(Failure::abort(&c, ParseErrorReason::ZeroDenominator));
    }
    let numer = Radix::Decimal.accumulate(numer);
    Ok((Value::Rational(BigRational::new(numer, denom)), end))
}

/// Plain decimal digits, or "#" radix-letter followed by digits of that
/// radix. A radix prefix with no digits reads as 0.
pub(super) fn integer(cursor: Cursor) -> Parsed<Value> {
    let after_hash = match cursor.eat('#') {
        Some(c) => c,
        None => {
            let (digits, next) = decimal_digits(cursor)?;
            return Ok((Value::Integer(Radix::Decimal.accumulate(digits)), next));
        }
    };

    let (radix, c) = match after_hash.bump() {
        Some((letter, c)) => match Radix::from_prefix(letter) {
            Some(radix) => (radix, c),
            None => return Err(Failure::expected(&after_hash, "radix (d, b, o or x)")),
        },
        None => return Err(Failure::expected(&after_hash, "radix (d, b, o or x)")),
    };
    let (digits, next) = c.take_while(|d| radix.is_digit(d));
    Ok((Value::Integer(radix.accumulate(digits)), next))
}


#[cfg(test)]
#[path = "./number_test.rs"]
mod number_test;
