//! The interactive prompt loop.
//!
//! One line is one program: each iteration lexes and parses the line, and
//! on success evaluates it against the session's single persistent
//! environment - `let` bindings made on one line are visible on every
//! later line. Parser diagnostics are printed and evaluation is skipped
//! for that line; they never end the session.

use std::io::{BufRead, Result, Write};

use tarn_eval::{Environment, Evaluator};
use tarn_lex::Lexer;
use tarn_par::Parser;

/// The interactive prompt.
pub const PROMPT: &str = ">> ";

/// Prefix printed before each parser diagnostic.
const PARSER_ERROR_PREFIX: &str = "Oops we got an unexpected Parser Error: \n\t";

/// Runs the prompt loop until end of input.
///
/// Generic over the streams so the loop is testable; the binary passes
/// locked stdin/stdout.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let mut evaluator = Evaluator::new(Environment::new().shared());
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        let errors = parser.errors();
        if !errors.is_empty() {
            for message in errors {
                writeln!(output, "{PARSER_ERROR_PREFIX}{message}")?;
            }
            continue;
        }

        if let Some(value) = evaluator.eval(&program) {
            writeln!(output, "{}", value.inspect())?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> String {
        let mut reader = input.as_bytes();
        let mut output = Vec::new();
        start(&mut reader, &mut output).expect("repl I/O failed");
        String::from_utf8(output).expect("repl output was not UTF-8")
    }

    #[test]
    fn test_expression_is_evaluated_and_printed() {
        let output = run_session("1 + 2\n");
        assert_eq!(output, ">> 3\n>> ");
    }

    #[test]
    fn test_session_terminates_on_eof() {
        let output = run_session("");
        assert_eq!(output, ">> ");
    }

    #[test]
    fn test_let_binding_prints_nothing() {
        let output = run_session("let x = 5;\n");
        assert_eq!(output, ">> >> ");
    }

    #[test]
    fn test_bindings_survive_across_lines() {
        let output = run_session("let x = 40;\nx + 2\n");
        assert_eq!(output, ">> >> 42\n>> ");
    }

    #[test]
    fn test_functions_survive_across_lines() {
        let output = run_session("let add = fn(a, b) { a + b };\nadd(20, 22)\n");
        assert!(output.contains("42\n"));
    }

    #[test]
    fn test_parser_errors_are_reported_and_session_continues() {
        let output = run_session("let = 1\n2 + 2\n");
        assert!(
            output.contains(
                "Oops we got an unexpected Parser Error: \n\texpected next token to be IDENT"
            ),
            "output: {output:?}"
        );
        // The next line still evaluates.
        assert!(output.contains("4\n"), "output: {output:?}");
    }

    #[test]
    fn test_broken_line_does_not_evaluate() {
        // A line with parse errors is skipped entirely: the binding must
        // not appear on later lines.
        let output = run_session("let x 5\nx\n");
        assert!(output.contains("ERROR: Unknown identifier: x"), "output: {output:?}");
    }

    #[test]
    fn test_runtime_errors_display_inline() {
        let output = run_session("5 + true\n");
        assert!(
            output.contains("ERROR: Mismatch types: INTEGER + BOOLEAN\n"),
            "output: {output:?}"
        );
    }

    #[test]
    fn test_null_result_is_printed() {
        // A branchless false `if` yields the language NULL, which is a
        // value (unlike a binding, which yields nothing).
        let output = run_session("if (false) { 1 }\n");
        assert!(output.contains("null\n"), "output: {output:?}");
    }
}
