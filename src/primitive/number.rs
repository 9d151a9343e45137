//! Numeric payloads which the num crates don't cover directly.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use self::Radix::*;


#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// Digit alphabet selected by a `#d`, `#b`, `#o` or `#x` prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}


impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl Radix {
    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            'b' => Some(Binary),
            'o' => Some(Octal),
            'd' => Some(Decimal),
            'x' => Some(Hexadecimal),
            _ => None,
        }
    }

    pub fn base(self) -> u32 {
        match self {
            Binary => 2,
            Octal => 8,
            Decimal => 10,
            Hexadecimal => 16,
        }
    }

    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.base())
    }

    /// Folds digits most-significant first. Characters outside the
    /// alphabet are skipped, and an empty run is 0.
    pub fn accumulate<S: AsRef<str>>(self, digits: S) -> BigInt {
        let base = self.base();
        digits
            .as_ref()
            .chars()
            .filter_map(|c| c.to_digit(base))
            .fold(BigInt::zero(), |value, digit| value * base + digit)
    }
}


impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{:?}{:?}i", self.re, self.im)
        } else {
            write!(f, "{:?}+{:?}i", self.re, self.im)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_accumulate() {
        assert_eq!(Binary.accumulate("1010"), BigInt::from(10));
        assert_eq!(Octal.accumulate("12"), BigInt::from(10));
        assert_eq!(Hexadecimal.accumulate("A"), BigInt::from(10));
        assert_eq!(Hexadecimal.accumulate("ff"), BigInt::from(255));
        assert_eq!(Decimal.accumulate(""), BigInt::zero());
    }

    #[test]
    fn radix_prefixes() {
        assert_eq!(Radix::from_prefix('x'), Some(Hexadecimal));
        assert_eq!(Radix::from_prefix('q'), None);
        assert!(Octal.is_digit('7'));
        assert!(!Octal.is_digit('8'));
    }

    #[test]
    fn complex_display() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1.0+2.0i");
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5-2.0i");
    }
}
