//! Built-in functions.
//!
//! A read-only, process-wide table of host callables, resolved by name
//! when an identifier is not found in the environment chain (so user
//! bindings shadow built-ins by the normal resolution rules). Built-ins
//! receive already-evaluated argument values and return a plain `Value`;
//! they report misuse as `Error` values like every other evaluation rule.

use crate::value::Value;

/// Signature of a host callable.
pub type BuiltinFn = fn(Vec<Value>) -> Value;

/// A named host function.
pub struct Builtin {
    /// Name the evaluator resolves
    pub name: &'static str,
    /// Host implementation
    pub func: BuiltinFn,
}

/// The builtin table. Extension point: add an entry, nothing else.
pub static BUILTINS: &[Builtin] = &[Builtin {
    name: "len",
    func: builtin_len,
}];

/// Resolves a builtin by name.
pub fn lookup(name: &str) -> Option<Value> {
    BUILTINS
        .iter()
        .find(|builtin| builtin.name == name)
        .map(Value::Builtin)
}

/// `len(x)` - byte length of a string.
fn builtin_len(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return Value::Error(format!(
            "Invalid number of argument to `len` function. Expected: 1, Got: {}",
            args.len()
        ));
    }

    match &args[0] {
        Value::Str(value) => Value::Int(value.len() as i64),
        other => Value::Error(format!(
            "Invalid argument to `len` function. Got: {}",
            other.type_name()
        )),
    }
}
