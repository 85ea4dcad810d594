//! tarn-drv - Interpreter Driver
//!
//! ============================================================================
//! DRIVER OVERVIEW
//! ============================================================================
//!
//! The driver is the entry point and orchestrator for the interpretation
//! pipeline. It is responsible for:
//!
//! 1. PIPELINE ORCHESTRATION
//!    - Run the phases in order: lex -> parse -> evaluate
//!    - Short-circuit after a phase for the `--emit` modes
//!    - Keep language errors (values) separate from process errors
//!
//! 2. THE REPL
//!    - One persistent environment per session, so `let` bindings
//!      survive across lines
//!    - Parser diagnostics printed per line, evaluation skipped
//!
//! 3. SCRIPT MODE
//!    - Read a file, run the pipeline once, print the final value
//!    - Exit status reflects parse failures and error values
//!
//! ```text
//! Source text
//!      |
//!      v
//!   [Lexer] --> token stream          (--emit tokens stops here)
//!      |
//!      v
//!   [Parser] --> Program (AST)        (--emit ast stops here)
//!      |
//!      v
//!   [Evaluator] --> Value             (displayed via inspect())
//! ```

pub mod error;
pub mod repl;

pub use error::{DriverError, Result};

use std::fs;
use std::path::Path;

use tracing::debug;

use tarn_eval::{Evaluator, Value};
use tarn_lex::Lexer;
use tarn_par::{Parser, Program};

/// What the pipeline should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmitType {
    /// Stop after lexing and show the token stream
    Tokens,
    /// Stop after parsing and show the canonical AST rendering
    Ast,
    /// Run the full pipeline and produce the final value
    #[default]
    Value,
}

/// Outcome of running a program through the pipeline.
#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    /// Phase output text (`--emit` modes)
    Output(String),
    /// The program's final value
    Value(Value),
    /// The program produced nothing to show (empty program or a program
    /// ending in a binding)
    Silent,
}

/// Reads and runs a script file.
pub fn run_file(path: &Path, emit: EmitType) -> Result<RunOutcome> {
    let source = fs::read_to_string(path).map_err(|source| DriverError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read source file");
    run_source(&source, emit)
}

/// Runs source text through the pipeline up to the requested phase.
pub fn run_source(source: &str, emit: EmitType) -> Result<RunOutcome> {
    if emit == EmitType::Tokens {
        return Ok(RunOutcome::Output(render_tokens(source)));
    }

    let program = parse_source(source)?;

    if emit == EmitType::Ast {
        return Ok(RunOutcome::Output(program.to_string()));
    }

    debug!(statements = program.stmts.len(), "evaluating program");
    match Evaluator::default().eval(&program) {
        Some(value) => Ok(RunOutcome::Value(value)),
        None => Ok(RunOutcome::Silent),
    }
}

/// Parses source text, converting accumulated diagnostics into a driver
/// error.
pub fn parse_source(source: &str) -> Result<Program> {
    debug!(bytes = source.len(), "parsing source");
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let errors = parser.errors();
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(DriverError::Parse { errors })
    }
}

/// Renders the token stream, one token per line, `Eof` excluded.
fn render_tokens(source: &str) -> String {
    debug!(bytes = source.len(), "lexing source");
    Lexer::new(source)
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
