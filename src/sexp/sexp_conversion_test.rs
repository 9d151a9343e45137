use num_bigint::BigInt;

use crate::sexp::Value;


#[test]
fn list_macro() {
    assert_eq!(list!(), Value::List(vec![]));
    assert_eq!(
        list!(Value::atom("quote"), 1, "s", true, 'c', 2.5),
        Value::List(vec![
            Value::Atom("quote".to_string()),
            Value::Integer(BigInt::from(1)),
            Value::String("s".to_string()),
            Value::Bool(true),
            Value::Char('c'),
            Value::Float(2.5),
        ])
    );
}

#[test]
fn vec_into_value() {
    let v = vec![Value::atom("test"), Value::atom("ing")];
    assert_eq!(Value::from(v), list!(Value::atom("test"), Value::atom("ing")));

    let ints: Vec<i64> = vec![1, 2];
    assert_eq!(Value::from(ints), list!(1, 2));
}
