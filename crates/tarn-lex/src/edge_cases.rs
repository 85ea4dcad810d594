//! Edge case tests for tarn-lex
//!
//! The contract under test is totality - the lexer must produce a token
//! stream ending in `Eof` for arbitrary byte sequences, flagging what it
//! cannot classify as `Illegal` rather than failing.
