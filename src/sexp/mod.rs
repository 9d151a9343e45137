#[macro_use]
mod sexp_conversion;

pub mod sexp;


pub use sexp::Value;
