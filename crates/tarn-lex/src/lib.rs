//! tarn-lex - Lexical Analyzer (Lexer/Tokenizer)
//!
//! ============================================================================
//! LEXICAL ANALYSIS OVERVIEW
//! ============================================================================
//!
//! Lexical analysis is the first phase of interpretation. It transforms a
//! stream of characters into a stream of tokens, on demand: the parser pulls
//! one token at a time via `Lexer::next_token()`, and the lexer never looks
//! more than one character ahead.
//!
//! ```text
//! Source: "let x = 42;"
//!
//! Lexemes:  "let", " ", "x", " ", "=", " ", "42", ";"
//! Tokens:   [Let] [Ident "x"] [Assign] [Int "42"] [Semicolon] [Eof]
//!           (whitespace skipped)
//! ```
//!
//! TOKEN CATEGORIES:
//! -----------------
//! 1. KEYWORDS - `let`, `fn`, `true`, `false`, `if`, `else`, `return`.
//!    Reserved words; identifier scanning consults the keyword table.
//!
//! 2. IDENTIFIERS - `[a-zA-Z_][a-zA-Z0-9_]*` (ASCII only by language rule).
//!
//! 3. LITERALS - decimal integers and raw `"..."` strings (no escapes;
//!    the literal is the exact byte run between the quotes).
//!
//! 4. OPERATORS - `=  +  -  *  /  !  ==  !=  <  >`. Only `==` and `!=`
//!    need the one-character lookahead.
//!
//! 5. PUNCTUATION - `,  ;  (  )  {  }`.
//!
//! 6. SPECIAL - `Eof` once the input is exhausted (and on every call after
//!    that), `Illegal` for any byte outside the language's alphabet.
//!
//! IMPLEMENTATION TECHNIQUE:
//! -------------------------
//! Direct-coded scanning: classification by the current byte, with one
//! dedicated read routine per multi-character token class (identifier,
//! number, string). The cursor keeps two indices into the source - the
//! current byte and the read-ahead byte - with a NUL sentinel at end of
//! input, so end handling falls out of the same dispatch as everything
//! else.
//!
//! ERROR STRATEGY:
//! ---------------
//! The lexer cannot fail. Unknown bytes become `Illegal` tokens and an
//! unterminated string simply runs to end of input; both surface later as
//! parser diagnostics. This keeps the token stream total over arbitrary
//! input, which the parser's recovery story depends on.

pub mod cursor;
mod edge_cases;
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{lookup_keyword, Token, TokenKind};
