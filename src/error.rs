//! Representation of errors which can be reified as S-exps.
//!
//! General error mechanism that can hold any ErrorKind. Reification allows
//! Errors to be inspected and rendered with the same machinery as any other
//! Value, which keeps parse and reduction failures uniform for callers.

use dyn_clone::DynClone;
use std::fmt;

use crate::sexp::Value;


/// Creates an Error wrapped in Err.
///
/// Called as:  err!(kind).
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::new(Box::new($($kind)+)))
    };
}


#[derive(Clone)]
pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Display + fmt::Debug + DynClone {
    fn reify(&self) -> Value;

    /// Short marker used when rendering this kind of failure as text.
    fn marker(&self) -> &'static str;
}


impl Error {
    /// Prefer using err! for convenience.
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }

    pub fn consume(self) -> Box<dyn ErrorKind> {
        self.kind
    }
}

impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.kind().reify() == other.kind().reify()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} => {}", self.kind(), self.kind().reify())
    }
}

impl std::error::Error for Error {}

dyn_clone::clone_trait_object!(ErrorKind);
