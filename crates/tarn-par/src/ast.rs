//! Abstract syntax tree for the Tarn language.
//!
//! The AST is two disjoint variant sets - statements and expressions - with
//! a `Program` (statement sequence) at the root. Nodes are plain data: flat
//! enums and structs, no inheritance, all behavior in `match` dispatch.
//!
//! Every node renders to a canonical source-like string via `Display`. The
//! rendering fully parenthesizes prefix and infix expressions, so operator
//! precedence decided at parse time stays visible in the output:
//!
//! ```text
//! -a * b            =>  ((-a) * b)
//! a + b * c + d     =>  ((a + (b * c)) + d)
//! ```
//!
//! This rendering is a first-class observable - the precedence test suite
//! and the driver's `--emit ast` mode both rely on it - and it re-parses:
//! `let`/`return` carry their trailing `;`, blocks render inside braces,
//! and string literals render quoted.
//!
//! Nodes are constructed by the parser, owned by the `Program`, and
//! read-only afterwards; the evaluator clones the pieces a function value
//! needs to outlive its defining call.

use std::fmt;

/// An identifier: a bare name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident(pub String);

impl Ident {
    /// Creates an identifier from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prefix (unary) operator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixOp {
    /// "!" - Logical negation
    Not,
    /// "-" - Arithmetic negation
    Neg,
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixOp::Not => f.write_str("!"),
            PrefixOp::Neg => f.write_str("-"),
        }
    }
}

/// Infix (binary) operator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfixOp {
    /// "+" - Addition
    Add,
    /// "-" - Subtraction
    Sub,
    /// "*" - Multiplication
    Mul,
    /// "/" - Division
    Div,
    /// "<" - Less than
    Lt,
    /// ">" - Greater than
    Gt,
    /// "==" - Equality
    Eq,
    /// "!=" - Inequality
    NotEq,
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
        };
        f.write_str(s)
    }
}

// ============================================================================
// STATEMENTS
// ============================================================================

/// Statement
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// Let binding
    ///
    /// Example: `let x = 5;`
    Let {
        /// Name being bound
        name: Ident,
        /// Bound value expression
        value: Expr,
    },

    /// Early return
    ///
    /// Example: `return x + 1;`
    Return {
        /// Returned value expression
        value: Expr,
    },

    /// Bare expression in statement position
    ///
    /// Example: `x + 10;`
    Expr {
        /// The expression
        expr: Expr,
    },
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, value } => write!(f, "let {name} = {value};"),
            Stmt::Return { value } => write!(f, "return {value};"),
            Stmt::Expr { expr } => write!(f, "{expr}"),
        }
    }
}

/// A braced statement sequence: the body form of `if` and `fn`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Block {
    /// Statements in source order
    pub stmts: Vec<Stmt>,
}

impl Block {
    /// Creates a block from a statement sequence.
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }

    /// Returns true if the block contains no statements.
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for stmt in &self.stmts {
            write!(f, "{stmt}")?;
        }
        f.write_str(" }")
    }
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

/// Expression
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Name reference
    ///
    /// Example: `foobar`
    Ident(Ident),

    /// Integer literal
    ///
    /// Example: `5`
    Int(i64),

    /// Boolean literal
    ///
    /// Example: `true`
    Bool(bool),

    /// String literal
    ///
    /// Example: `"hello world"`
    Str(String),

    /// Prefix operation
    ///
    /// Example: `!ok`, `-5`
    Prefix {
        /// The operator
        op: PrefixOp,
        /// Operand
        right: Box<Expr>,
    },

    /// Infix operation
    ///
    /// Example: `a + b`
    Infix {
        /// The operator
        op: InfixOp,
        /// Left operand
        left: Box<Expr>,
        /// Right operand
        right: Box<Expr>,
    },

    /// Conditional expression
    ///
    /// Example: `if (a < b) { a } else { b }`
    ///
    /// `alternative` is either absent or a non-empty block; the parser
    /// normalizes an empty `else {}` to absence.
    If {
        /// Condition expression
        condition: Box<Expr>,
        /// Branch taken when the condition is truthy
        consequence: Block,
        /// Optional branch taken otherwise
        alternative: Option<Block>,
    },

    /// Function literal
    ///
    /// Example: `fn(x, y) { x + y }`
    ///
    /// Duplicate parameter names are not rejected here; the later binding
    /// wins at call time.
    Function {
        /// Parameter names in order
        params: Vec<Ident>,
        /// Function body
        body: Block,
    },

    /// Call expression
    ///
    /// Example: `add(1, 2 * 3)`
    Call {
        /// Callee: any expression evaluating to a callable
        function: Box<Expr>,
        /// Arguments in order
        args: Vec<Expr>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(ident) => write!(f, "{ident}"),
            Expr::Int(value) => write!(f, "{value}"),
            Expr::Bool(value) => write!(f, "{value}"),
            Expr::Str(value) => write!(f, "\"{value}\""),
            Expr::Prefix { op, right } => write!(f, "({op}{right})"),
            Expr::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Expr::Function { params, body } => {
                let params = params
                    .iter()
                    .map(Ident::name)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "fn({params}) {body}")
            }
            Expr::Call { function, args } => {
                let args = args
                    .iter()
                    .map(Expr::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{function}({args})")
            }
        }
    }
}

// ============================================================================
// PROGRAM
// ============================================================================

/// The root node: an ordered statement sequence.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order
    pub stmts: Vec<Stmt>,
}

impl Program {
    /// Creates a program from a statement sequence.
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }

    /// Returns true if the program contains no statements.
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.stmts {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_let_statement() {
        let program = Program::new(vec![Stmt::Let {
            name: Ident::new("x"),
            value: Expr::Ident(Ident::new("y")),
        }]);

        assert_eq!(program.to_string(), "let x = y;");
    }

    #[test]
    fn test_render_return_statement() {
        let stmt = Stmt::Return {
            value: Expr::Int(10),
        };
        assert_eq!(stmt.to_string(), "return 10;");
    }

    #[test]
    fn test_render_parenthesizes_operators() {
        // (-a) * b
        let expr = Expr::Infix {
            op: InfixOp::Mul,
            left: Box::new(Expr::Prefix {
                op: PrefixOp::Neg,
                right: Box::new(Expr::Ident(Ident::new("a"))),
            }),
            right: Box::new(Expr::Ident(Ident::new("b"))),
        };
        assert_eq!(expr.to_string(), "((-a) * b)");
    }

    #[test]
    fn test_render_if_expression() {
        let expr = Expr::If {
            condition: Box::new(Expr::Infix {
                op: InfixOp::Lt,
                left: Box::new(Expr::Ident(Ident::new("x"))),
                right: Box::new(Expr::Ident(Ident::new("y"))),
            }),
            consequence: Block::new(vec![Stmt::Expr {
                expr: Expr::Ident(Ident::new("x")),
            }]),
            alternative: Some(Block::new(vec![Stmt::Expr {
                expr: Expr::Ident(Ident::new("y")),
            }])),
        };
        assert_eq!(expr.to_string(), "if ((x < y)) { x } else { y }");
    }

    #[test]
    fn test_render_function_literal() {
        let expr = Expr::Function {
            params: vec![Ident::new("x"), Ident::new("y")],
            body: Block::new(vec![Stmt::Expr {
                expr: Expr::Infix {
                    op: InfixOp::Add,
                    left: Box::new(Expr::Ident(Ident::new("x"))),
                    right: Box::new(Expr::Ident(Ident::new("y"))),
                },
            }]),
        };
        assert_eq!(expr.to_string(), "fn(x, y) { (x + y) }");
    }

    #[test]
    fn test_render_call_expression() {
        let expr = Expr::Call {
            function: Box::new(Expr::Ident(Ident::new("add"))),
            args: vec![
                Expr::Int(1),
                Expr::Infix {
                    op: InfixOp::Mul,
                    left: Box::new(Expr::Int(2)),
                    right: Box::new(Expr::Int(3)),
                },
            ],
        };
        assert_eq!(expr.to_string(), "add(1, (2 * 3))");
    }

    #[test]
    fn test_render_string_literal_quoted() {
        let expr = Expr::Str("hello world".to_string());
        assert_eq!(expr.to_string(), "\"hello world\"");
    }

    #[test]
    fn test_render_empty_program() {
        assert_eq!(Program::default().to_string(), "");
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(PrefixOp::Not.to_string(), "!");
        assert_eq!(PrefixOp::Neg.to_string(), "-");
        assert_eq!(InfixOp::Eq.to_string(), "==");
        assert_eq!(InfixOp::NotEq.to_string(), "!=");
    }
}
