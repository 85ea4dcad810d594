//! Edge case tests for tarn-par
//!
//! The contract under test is accumulation: the parser never halts on a
//! single syntax error. A failed rule drops its statement, records a
//! diagnostic, and parsing continues to the end of the token stream.

#[cfg(test)]
mod tests {
    use crate::{Parser, Program};
    use tarn_lex::Lexer;

    fn parse(input: &str) -> (Program, Vec<String>) {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_program();
        let errors = parser.errors();
        (program, errors)
    }

    #[test]
    fn test_let_without_identifier() {
        let (_, errors) = parse("let = 10;");
        assert!(
            errors.contains(&"expected next token to be IDENT, got = instead".to_string()),
            "errors: {errors:?}"
        );
    }

    #[test]
    fn test_let_without_assign() {
        let (_, errors) = parse("let x 5;");
        assert_eq!(
            errors,
            vec!["expected next token to be =, got INT instead".to_string()]
        );
    }

    #[test]
    fn test_parsing_continues_after_error() {
        let (program, errors) = parse("let = 1; let y = 2;");
        assert!(!errors.is_empty());
        // The well-formed statement after the broken one still lands.
        assert!(program.to_string().contains("let y = 2;"));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let (_, errors) = parse("let x 5; let = 10; let 838383;");
        assert!(errors.len() >= 3, "expected several errors, got {errors:?}");
    }

    #[test]
    fn test_no_prefix_rule_for_stray_operator() {
        let (program, errors) = parse("+ 5;");
        assert!(
            errors.contains(&"no prefix parse function for + found".to_string()),
            "errors: {errors:?}"
        );
        // The broken expression is dropped; `5` still parses.
        assert_eq!(program.to_string(), "5");
    }

    #[test]
    fn test_illegal_token_surfaces_as_parse_error() {
        let (_, errors) = parse("@");
        assert_eq!(
            errors,
            vec!["no prefix parse function for ILLEGAL found".to_string()]
        );
    }

    #[test]
    fn test_integer_overflow_is_a_diagnostic() {
        let (program, errors) = parse("9999999999999999999999");
        assert!(program.is_empty(), "overflowing statement must be omitted");
        assert_eq!(
            errors,
            vec!["could not parse \"9999999999999999999999\" as integer".to_string()]
        );
    }

    #[test]
    fn test_i64_boundary_values_parse() {
        let (program, errors) = parse("9223372036854775807;");
        assert!(errors.is_empty());
        assert_eq!(program.to_string(), "9223372036854775807");

        // i64::MIN cannot be written as a literal: the lexer scans the bare
        // digits and 9223372036854775808 overflows before negation applies.
        let (_, errors) = parse("-9223372036854775808");
        assert_eq!(
            errors,
            vec!["could not parse \"9223372036854775808\" as integer".to_string()]
        );
    }

    #[test]
    fn test_unclosed_group() {
        let (_, errors) = parse("(1 + 2");
        assert_eq!(
            errors,
            vec!["expected next token to be ), got EOF instead".to_string()]
        );
    }

    #[test]
    fn test_if_missing_condition_paren() {
        let (_, errors) = parse("if x { 1 }");
        assert!(
            errors.contains(&"expected next token to be (, got IDENT instead".to_string()),
            "errors: {errors:?}"
        );
    }

    #[test]
    fn test_unterminated_block_parses_to_eof() {
        // Block parsing stops at `}` or EOF without its own diagnostic;
        // the statements scanned so far are kept.
        let (program, errors) = parse("if (x) { 1");
        assert!(errors.is_empty(), "errors: {errors:?}");
        assert_eq!(program.to_string(), "if (x) { 1 }");
    }

    #[test]
    fn test_function_parameter_list_errors() {
        // The leftover `) { x }` tokens produce follow-on diagnostics; the
        // parameter-list error comes first.
        let (_, errors) = parse("fn(x,) { x }");
        assert_eq!(
            errors.first().map(String::as_str),
            Some("expected next token to be IDENT, got ) instead")
        );

        let (_, errors) = parse("fn(1) { 1 }");
        assert_eq!(
            errors.first().map(String::as_str),
            Some("expected next token to be IDENT, got INT instead")
        );
    }

    #[test]
    fn test_call_argument_list_errors() {
        let (_, errors) = parse("add(1, 2");
        assert_eq!(
            errors,
            vec!["expected next token to be ), got EOF instead".to_string()]
        );
    }

    #[test]
    fn test_deeply_nested_groups_parse() {
        let input = format!("{}{}{}", "(".repeat(40), "1", ")".repeat(40));
        let (program, errors) = parse(&input);
        assert!(errors.is_empty());
        assert_eq!(program.to_string(), "1");
    }

    #[test]
    fn test_semicolon_only_input() {
        // A bare `;` has no prefix rule; it is reported, not fatal.
        let (program, errors) = parse(";;;");
        assert!(program.is_empty());
        assert_eq!(errors.len(), 3);
    }
}
