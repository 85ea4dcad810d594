//! tarn-eval - Tree-Walking Evaluator
//!
//! ============================================================================
//! EVALUATION MODEL
//! ============================================================================
//!
//! The evaluator walks the AST recursively, one `match` arm per node
//! variant, against a chain of lexical environments. There is no bytecode,
//! no VM, and no suspension point: every `eval` call runs to completion on
//! one thread, statements strictly in source order, arguments strictly
//! left-to-right.
//!
//! CONTROL FLOW WITHOUT EXCEPTIONS:
//! --------------------------------
//! Two sentinel value variants carry control flow up the recursion instead
//! of host panics or exceptions:
//!
//! - `Value::Return` marks "a `return` executed below here". Program
//!   evaluation and function calls unwrap it; block evaluation passes it
//!   through untouched. The asymmetry is what makes a `return` nested in
//!   inner blocks exit the outermost function:
//!
//!   ```text
//!   if (10 > 1) {
//!     if (10 > 1) { return 10; }   <- inner block yields Return(10)
//!     return 1;                    <- never reached
//!   }                              <- block passes Return(10) through
//!   ```
//!
//! - `Value::Error` is a first-class diagnostic. Every rule checks each
//!   sub-result before combining; the first error aborts the enclosing
//!   operation and becomes the result. Errors are never transformed into
//!   other error kinds on the way up.
//!
//! CLOSURES:
//! ---------
//! A function literal captures the environment where it was evaluated, by
//! shared reference. Calling the function extends *that* environment with
//! one fresh frame of parameter bindings - not the caller's - which is all
//! lexical scoping requires:
//!
//! ```text
//! let add = fn(a) { fn(b) { a + b } };
//! let add2 = add(2);     <- inner fn captured the frame where a = 2
//! add2(40)               <- 42; the frame outlived its call
//! ```
//!
//! TRUTHINESS:
//! -----------
//! Only `NULL` and `FALSE` are false in conditions. Everything else -
//! including the integer `0` and the empty string - is truthy.

pub mod builtins;
mod edge_cases;
pub mod env;
pub mod value;

pub use builtins::{Builtin, BuiltinFn};
pub use env::Environment;
pub use value::{native_bool_to_value, Value, FALSE, NULL, TRUE};

use std::cell::RefCell;
use std::rc::Rc;

use tarn_par::{Block, Expr, InfixOp, PrefixOp, Program, Stmt};

/// The Tarn evaluator.
///
/// Holds the environment that top-level statements read and bind. The same
/// evaluator can run many programs against one environment - that is how
/// the REPL keeps `let` bindings alive across lines.
///
/// # Example
///
/// ```
/// use tarn_eval::{Evaluator, Value};
/// use tarn_lex::Lexer;
/// use tarn_par::Parser;
///
/// let program = Parser::new(Lexer::new("let x = 5; x * 2")).parse_program();
/// let result = Evaluator::default().eval(&program);
///
/// assert_eq!(result, Some(Value::Int(10)));
/// ```
pub struct Evaluator {
    env: Rc<RefCell<Environment>>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Environment::new().shared())
    }
}

impl Evaluator {
    /// Creates an evaluator over the given environment.
    pub fn new(env: Rc<RefCell<Environment>>) -> Self {
        Self { env }
    }

    /// Evaluates a program.
    ///
    /// Returns `None` when there is nothing to show at the host level: an
    /// empty program, or one whose final statement is a binding. Language
    /// errors are `Some(Value::Error(..))`, never host errors.
    pub fn eval(&mut self, program: &Program) -> Option<Value> {
        let mut result = None;

        for stmt in &program.stmts {
            match self.eval_stmt(stmt) {
                // A top-level return unwraps to its inner value.
                Some(Value::Return(value)) => return Some(*value),
                Some(error @ Value::Error(_)) => return Some(error),
                other => result = other,
            }
        }

        result
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    /// Evaluates one statement. `None` means the statement produced no
    /// observable value (bindings).
    fn eval_stmt(&mut self, stmt: &Stmt) -> Option<Value> {
        match stmt {
            Stmt::Expr { expr } => Some(self.eval_expr(expr)),
            Stmt::Let { name, value } => {
                let value = self.eval_expr(value);
                if value.is_error() {
                    return Some(value);
                }
                self.env.borrow_mut().set(name.name(), value);
                None
            }
            Stmt::Return { value } => {
                let value = self.eval_expr(value);
                if value.is_error() {
                    return Some(value);
                }
                Some(Value::Return(Box::new(value)))
            }
        }
    }

    /// Evaluates a block.
    ///
    /// Unlike program evaluation, `Return` is NOT unwrapped here - it is
    /// handed up as-is so the enclosing function call sees the return
    /// intent. An empty block (or one ending in a binding) yields `NULL`.
    fn eval_block(&mut self, block: &Block) -> Value {
        let mut result = NULL;

        for stmt in &block.stmts {
            match self.eval_stmt(stmt) {
                Some(value @ (Value::Return(_) | Value::Error(_))) => return value,
                Some(value) => result = value,
                None => result = NULL,
            }
        }

        result
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    /// Evaluates one expression. Expressions always produce a value;
    /// failures are `Value::Error`.
    fn eval_expr(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::Int(value) => Value::Int(*value),
            Expr::Bool(value) => native_bool_to_value(*value),
            Expr::Str(value) => Value::Str(value.clone()),
            Expr::Ident(ident) => self.eval_identifier(ident.name()),
            Expr::Prefix { op, right } => {
                let right = self.eval_expr(right);
                if right.is_error() {
                    return right;
                }
                eval_prefix_expression(*op, right)
            }
            Expr::Infix { op, left, right } => {
                let left = self.eval_expr(left);
                if left.is_error() {
                    return left;
                }
                let right = self.eval_expr(right);
                if right.is_error() {
                    return right;
                }
                eval_infix_expression(*op, left, right)
            }
            Expr::If {
                condition,
                consequence,
                alternative,
            } => self.eval_if_expression(condition, consequence, alternative.as_ref()),
            Expr::Function { params, body } => Value::Function {
                params: params.clone(),
                body: body.clone(),
                env: Rc::clone(&self.env),
            },
            Expr::Call { function, args } => {
                let function = self.eval_expr(function);
                if function.is_error() {
                    return function;
                }
                match self.eval_expressions(args) {
                    Ok(args) => self.apply_function(function, args),
                    Err(error) => error,
                }
            }
        }
    }

    /// Resolves a name: environment chain first, then built-ins.
    fn eval_identifier(&self, name: &str) -> Value {
        if let Some(value) = self.env.borrow().get(name) {
            return value;
        }
        if let Some(builtin) = builtins::lookup(name) {
            return builtin;
        }
        Value::Error(format!("Unknown identifier: {name}"))
    }

    /// Evaluates `if`: only `NULL` and `FALSE` fail the condition.
    fn eval_if_expression(
        &mut self,
        condition: &Expr,
        consequence: &Block,
        alternative: Option<&Block>,
    ) -> Value {
        let condition = self.eval_expr(condition);
        if condition.is_error() {
            return condition;
        }

        if is_truthy(&condition) {
            self.eval_block(consequence)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative)
        } else {
            NULL
        }
    }

    /// Evaluates an expression list left-to-right, stopping at the first
    /// error.
    fn eval_expressions(&mut self, exprs: &[Expr]) -> Result<Vec<Value>, Value> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            let value = self.eval_expr(expr);
            if value.is_error() {
                return Err(value);
            }
            values.push(value);
        }
        Ok(values)
    }

    /// Applies a callable to evaluated arguments.
    fn apply_function(&mut self, function: Value, args: Vec<Value>) -> Value {
        match function {
            Value::Function { params, body, env } => {
                if params.len() != args.len() {
                    return Value::Error(format!(
                        "wrong number of arguments: expected {}, got {}",
                        params.len(),
                        args.len()
                    ));
                }

                // One fresh frame over the *captured* environment; with
                // duplicate parameter names the later binding wins.
                let mut scope = Environment::new_enclosed(env);
                for (param, arg) in params.iter().zip(args) {
                    scope.set(param.name(), arg);
                }

                let caller_env = std::mem::replace(&mut self.env, scope.shared());
                let result = self.eval_block(&body);
                self.env = caller_env;

                // A return travelling out of the body stops here.
                match result {
                    Value::Return(value) => *value,
                    other => other,
                }
            }
            Value::Builtin(builtin) => (builtin.func)(args),
            other => Value::Error(format!("not a function: {}", other.type_name())),
        }
    }
}

// =============================================================================
// OPERATOR RULES
// =============================================================================

/// Condition policy: `NULL` and `FALSE` are false, everything else is
/// true. In particular `0` and `""` are truthy.
fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

fn eval_prefix_expression(op: PrefixOp, right: Value) -> Value {
    match op {
        PrefixOp::Not => eval_bang_operator(right),
        PrefixOp::Neg => eval_minus_operator(right),
    }
}

/// `!` truth table over the singletons; any other operand is truthy, so
/// its negation is `FALSE`.
fn eval_bang_operator(right: Value) -> Value {
    match right {
        Value::Bool(true) => FALSE,
        Value::Bool(false) => TRUE,
        Value::Null => TRUE,
        _ => FALSE,
    }
}

fn eval_minus_operator(right: Value) -> Value {
    match right {
        Value::Int(value) => Value::Int(value.wrapping_neg()),
        other => Value::Error(format!("Unknown operator: -{}", other.type_name())),
    }
}

fn eval_infix_expression(op: InfixOp, left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Int(left), Value::Int(right)) => eval_integer_infix(op, left, right),
        (Value::Bool(left), Value::Bool(right)) => eval_boolean_infix(op, left, right),
        (left, right) if left.type_name() != right.type_name() => Value::Error(format!(
            "Mismatch types: {} {} {}",
            left.type_name(),
            op,
            right.type_name()
        )),
        (left, right) => Value::Error(format!(
            "Unknown operator: {} {} {}",
            left.type_name(),
            op,
            right.type_name()
        )),
    }
}

/// Integer arithmetic and comparison. Arithmetic wraps at the i64
/// boundary; division truncates toward zero.
fn eval_integer_infix(op: InfixOp, left: i64, right: i64) -> Value {
    match op {
        InfixOp::Add => Value::Int(left.wrapping_add(right)),
        InfixOp::Sub => Value::Int(left.wrapping_sub(right)),
        InfixOp::Mul => Value::Int(left.wrapping_mul(right)),
        InfixOp::Div => {
            if right == 0 {
                Value::Error("division by zero".to_string())
            } else {
                Value::Int(left.wrapping_div(right))
            }
        }
        InfixOp::Lt => native_bool_to_value(left < right),
        InfixOp::Gt => native_bool_to_value(left > right),
        InfixOp::Eq => native_bool_to_value(left == right),
        InfixOp::NotEq => native_bool_to_value(left != right),
    }
}

/// Booleans support equality only.
fn eval_boolean_infix(op: InfixOp, left: bool, right: bool) -> Value {
    match op {
        InfixOp::Eq => native_bool_to_value(left == right),
        InfixOp::NotEq => native_bool_to_value(left != right),
        _ => Value::Error(format!("Unknown operator: BOOLEAN {op} BOOLEAN")),
    }
}
