use super::*;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::primitive::Complex;


#[test]
fn display_leaves() {
    assert_eq!(Value::atom("foo").to_string(), "foo");
    assert_eq!(Value::from(42).to_string(), "42");
    assert_eq!(Value::Float(3.14).to_string(), "3.14");
    assert_eq!(Value::Float(2.0).to_string(), "2.0");
    assert_eq!(Value::Bool(true).to_string(), "#t");
    assert_eq!(Value::Bool(false).to_string(), "#f");
    assert_eq!(Value::from("a b").to_string(), "\"a b\"");
    assert_eq!(Value::Complex(Complex::new(1.0, 2.0)).to_string(), "1.0+2.0i");
}

#[test]
fn display_chars() {
    assert_eq!(Value::Char('a').to_string(), "#\\a");
    assert_eq!(Value::Char('\n').to_string(), "#\\newline");
    assert_eq!(Value::Char(' ').to_string(), "#\\space");
}

#[test]
fn display_rational() {
    let half = BigRational::new(BigInt::from(1), BigInt::from(2));
    assert_eq!(Value::Rational(half).to_string(), "1/2");

    // Reduced, but still shown as a fraction.
    let two = BigRational::new(BigInt::from(4), BigInt::from(2));
    assert_eq!(Value::Rational(two).to_string(), "2/1");
}

#[test]
fn display_strings_unescaped() {
    assert_eq!(Value::from("a\nb").to_string(), "\"a\nb\"");
    assert_eq!(Value::from("say \"hi\"").to_string(), "\"say \"hi\"\"");
}

#[test]
fn display_lists() {
    assert_eq!(Value::List(vec![]).to_string(), "()");
    assert_eq!(
        list!(Value::atom("+"), 1, list!(Value::atom("f"), "x")).to_string(),
        "(+ 1 (f \"x\"))"
    );
    assert_eq!(
        Value::DottedList(vec![1.into(), 2.into()], Box::new(3.into())).to_string(),
        "(1 2 . 3)"
    );
}

#[test]
fn vector_displays_as_list() {
    let vector = Value::vector(vec![1.into(), 2.into()]);
    assert_eq!(vector.to_string(), "(1 2)");
    assert_ne!(vector, list!(1, 2));
}

#[test]
fn dotted_and_proper_distinct() {
    let dotted = Value::DottedList(vec![Value::atom("a")], Box::new(Value::atom("b")));
    let proper = list!(Value::atom("a"), Value::atom("b"));
    assert_ne!(dotted, proper);
}

#[test]
fn from_str() {
    let value: Value = "(a 1)".parse().unwrap();
    assert_eq!(value, list!(Value::atom("a"), 1));
    assert!("(a 1".parse::<Value>().is_err());
}

#[test]
fn type_names() {
    assert_eq!(Value::atom("x").type_name(), "atom");
    assert_eq!(Value::vector(vec![]).type_name(), "vector");
    assert!(Value::atom("quote").is_atom("quote"));
    assert!(!Value::from("quote").is_atom("quote"));
}
