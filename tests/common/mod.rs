use lisp_reader::parser::ParseIter;
use lisp_reader::prelude::*;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

#[allow(dead_code)]
pub fn results<S: AsRef<str>>(s: S) -> Vec<Value> {
    ParseIter::new(s.as_ref())
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

#[allow(dead_code)]
pub fn reduced<S: AsRef<str>>(s: S) -> Vec<Value> {
    results(s)
        .into_iter()
        .map(|v| reduce(v).unwrap())
        .collect::<Vec<_>>()
}
