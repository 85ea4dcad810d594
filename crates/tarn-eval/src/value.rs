//! Runtime value taxonomy.
//!
//! Every Tarn computation produces a `Value`. Two of the variants are
//! control-flow carriers rather than user-visible data: `Return` marks a
//! value travelling up out of a function body, and `Error` is a
//! first-class diagnostic that every evaluation rule propagates. Neither
//! involves host panics or exceptions.
//!
//! `TRUE`, `FALSE`, and `NULL` are process-wide `const` singletons; all
//! boolean production goes through [`native_bool_to_value`] so the
//! evaluator's truthiness and `!` rules compare against exactly those
//! values. The variants are unit-like, which makes structural comparison
//! observationally identical to comparing singleton identities.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tarn_par::{Block, Ident};

use crate::builtins::Builtin;
use crate::env::Environment;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// Boolean; produced only via the `TRUE`/`FALSE` singletons
    Bool(bool),

    /// Immutable string
    Str(String),

    /// The absence of a value
    Null,

    /// A value travelling up out of a function body.
    ///
    /// Unwrapped by program evaluation and by function calls; passed
    /// through untouched by block evaluation so nested returns exit the
    /// enclosing function.
    Return(Box<Value>),

    /// A first-class evaluation error.
    ///
    /// Every rule checks sub-results for this variant before combining
    /// them; the first error aborts the enclosing operation.
    Error(String),

    /// A user function with its captured environment.
    ///
    /// The environment reference keeps the definition-site scope alive for
    /// as long as the function value is reachable (lexical closure).
    Function {
        /// Parameter names in order
        params: Vec<Ident>,
        /// Function body
        body: Block,
        /// Environment captured at the definition site
        env: Rc<RefCell<Environment>>,
    },

    /// A host function registered by name
    Builtin(&'static Builtin),
}

/// The boolean true singleton.
pub const TRUE: Value = Value::Bool(true);

/// The boolean false singleton.
pub const FALSE: Value = Value::Bool(false);

/// The null singleton.
pub const NULL: Value = Value::Null;

/// Maps a host boolean onto the corresponding singleton.
pub fn native_bool_to_value(value: bool) -> Value {
    if value {
        TRUE
    } else {
        FALSE
    }
}

impl Value {
    /// The uppercase type tag used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR_OBJ",
            Value::Function { .. } => "FUNCTION_OBJ",
            Value::Builtin(_) => "BUILTIN_OBJ",
        }
    }

    /// Returns true for the `Error` variant.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// The value's display form.
    ///
    /// Never empty except for the empty string value.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Str(value) => f.write_str(value),
            Value::Null => f.write_str("null"),
            Value::Return(value) => write!(f, "{value}"),
            Value::Error(message) => write!(f, "ERROR: {message}"),
            Value::Function { params, body, .. } => {
                let params = params
                    .iter()
                    .map(Ident::name)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "fn({params}) {body}")
            }
            Value::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
        }
    }
}

// The environment chain can contain the function value that holds it, so
// Debug must not traverse the captured environment.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Value::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Value::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Value::Null => f.write_str("Null"),
            Value::Return(value) => f.debug_tuple("Return").field(value).finish(),
            Value::Error(message) => f.debug_tuple("Error").field(message).finish(),
            Value::Function { params, body, .. } => f
                .debug_struct("Function")
                .field("params", params)
                .field("body", &body.to_string())
                .finish_non_exhaustive(),
            Value::Builtin(builtin) => f.debug_tuple("Builtin").field(&builtin.name).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (
                Value::Function {
                    params: lp,
                    body: lb,
                    env: le,
                },
                Value::Function {
                    params: rp,
                    body: rb,
                    env: re,
                },
            ) => lp == rp && lb == rb && Rc::ptr_eq(le, re),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_compare_by_content() {
        assert_eq!(TRUE, Value::Bool(true));
        assert_eq!(FALSE, Value::Bool(false));
        assert_eq!(NULL, Value::Null);
        assert_ne!(TRUE, FALSE);
        assert_ne!(TRUE, NULL);
    }

    #[test]
    fn test_native_bool_to_value() {
        assert_eq!(native_bool_to_value(true), TRUE);
        assert_eq!(native_bool_to_value(false), FALSE);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Int(1).type_name(), "INTEGER");
        assert_eq!(TRUE.type_name(), "BOOLEAN");
        assert_eq!(Value::Str("s".into()).type_name(), "STRING");
        assert_eq!(NULL.type_name(), "NULL");
        assert_eq!(Value::Return(Box::new(NULL)).type_name(), "RETURN_VALUE");
        assert_eq!(Value::Error("boom".into()).type_name(), "ERROR_OBJ");
    }

    #[test]
    fn test_inspect_forms() {
        assert_eq!(Value::Int(42).inspect(), "42");
        assert_eq!(TRUE.inspect(), "true");
        assert_eq!(FALSE.inspect(), "false");
        assert_eq!(NULL.inspect(), "null");
        assert_eq!(Value::Str("hello".into()).inspect(), "hello");
        assert_eq!(
            Value::Error("Unknown identifier: foobar".into()).inspect(),
            "ERROR: Unknown identifier: foobar"
        );
    }

    #[test]
    fn test_return_wrapper_inspect_delegates() {
        let wrapped = Value::Return(Box::new(Value::Int(10)));
        assert_eq!(wrapped.inspect(), "10");
    }

    #[test]
    fn test_inspect_is_nonempty_except_empty_string() {
        assert!(Value::Str(String::new()).inspect().is_empty());
        for value in [Value::Int(0), TRUE, FALSE, NULL, Value::Error(" ".into())] {
            assert!(!value.inspect().is_empty(), "{value:?}");
        }
    }

    #[test]
    fn test_int_and_str_compare_by_content() {
        assert_eq!(Value::Int(5), Value::Int(5));
        assert_ne!(Value::Int(5), Value::Int(6));
        assert_eq!(Value::Str("a".into()), Value::Str("a".into()));
        assert_ne!(Value::Str("a".into()), Value::Str("b".into()));
    }

    #[test]
    fn test_cross_type_equality_is_false() {
        assert_ne!(Value::Int(0), NULL);
        assert_ne!(Value::Int(1), TRUE);
        assert_ne!(Value::Str("true".into()), TRUE);
    }

    #[test]
    fn test_is_error() {
        assert!(Value::Error("x".into()).is_error());
        assert!(!NULL.is_error());
        assert!(!Value::Return(Box::new(Value::Error("x".into()))).is_error());
    }
}
