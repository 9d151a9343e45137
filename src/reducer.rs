//! Reduction of parsed Values through the primitive table.
//!
//! Only the top-level application is meaningful here: there is no
//! environment, so the only symbols with meaning are quote and the builtin
//! operator names.

use log::{trace, warn};

use crate::builtins;
use crate::error::Error;
use crate::eval_error::EvalError::{InvalidSexp, UnboundSymbol, WrongArgumentCount};
use crate::eval_error::ExpectedCount;
use crate::sexp::Value;


pub fn reduce(value: Value) -> Result<Value, Error> {
    trace!("Reducing {}", value);
    match value {
        Value::Atom(name) => err!(UnboundSymbol(name)),
        Value::List(elems) => reduce_list(elems),
        dotted @ Value::DottedList(..) => err!(InvalidSexp(dotted)),
        // Everything else is a self-evaluating literal.
        literal => Ok(literal),
    }
}

fn reduce_list(elems: Vec<Value>) -> Result<Value, Error> {
    let name = match elems.first() {
        Some(Value::Atom(name)) => name.clone(),
        _ => return err!(InvalidSexp(Value::List(elems))),
    };
    if elems[0].is_atom("quote") {
        return quote(elems);
    }

    let args = elems
        .into_iter()
        .skip(1)
        .map(reduce)
        .collect::<Result<Vec<_>, _>>()?;
    match builtins::lookup(&name) {
        Some(builtin) => {
            trace!("Applying {} to {} args", builtin, args.len());
            builtin.call(args)
        }
        None => {
            warn!("Unknown primitive \"{}\"; reducing to #f", name);
            Ok(Value::Bool(false))
        }
    }
}

fn quote(mut elems: Vec<Value>) -> Result<Value, Error> {
    if elems.len() != 2 {
        return err!(WrongArgumentCount {
            given: elems.len() - 1,
            expected: ExpectedCount::Exactly(1),
        });
    }
    Ok(elems.swap_remove(1))
}


#[cfg(test)]
#[path = "./reducer_test.rs"]
mod reducer_test;
