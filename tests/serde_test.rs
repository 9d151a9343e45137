mod common;

use lisp_reader::prelude::*;


#[test]
fn value_round_trip() {
    common::setup();

    let original = parse("(define (f x) (list x 1/2 #\\a \"s\" #(1.5 #t) 1+2i . rest))").unwrap();
    let json = serde_json::to_string(&original).unwrap();
    let deserialized: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(original, deserialized);
}

#[test]
fn externally_tagged() {
    common::setup();

    let json = serde_json::to_value(&list!(Value::atom("a"), "b", true)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"List": [{"Atom": "a"}, {"String": "b"}, {"Bool": true}]})
    );
}
