//! The lexer: on-demand token production over a byte cursor.

use crate::cursor::{Cursor, EOF_BYTE};
use crate::token::{lookup_keyword, Token, TokenKind};

/// The Tarn lexer.
///
/// Produces one token per [`Lexer::next_token`] call; once the input is
/// exhausted every subsequent call returns `Eof`. The lexer holds no
/// buffered tokens and never needs more than the cursor's single byte of
/// lookahead.
///
/// # Example
///
/// ```
/// use tarn_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "five");
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().literal, "5");
/// assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Scans and returns the next token.
    ///
    /// Dispatch is on the current byte. Single-character tokens advance the
    /// cursor once before returning; the identifier, number, and string
    /// routines consume exactly their own bytes and return directly.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();

        let token = match self.cursor.ch() {
            b'=' => {
                if self.cursor.peek() == b'=' {
                    self.cursor.advance();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::from_byte(TokenKind::Assign, b'=')
                }
            }
            b'!' => {
                if self.cursor.peek() == b'=' {
                    self.cursor.advance();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::from_byte(TokenKind::Bang, b'!')
                }
            }
            b'+' => Token::from_byte(TokenKind::Plus, b'+'),
            b'-' => Token::from_byte(TokenKind::Minus, b'-'),
            b'*' => Token::from_byte(TokenKind::Asterisk, b'*'),
            b'/' => Token::from_byte(TokenKind::Slash, b'/'),
            b'<' => Token::from_byte(TokenKind::Lt, b'<'),
            b'>' => Token::from_byte(TokenKind::Gt, b'>'),
            b',' => Token::from_byte(TokenKind::Comma, b','),
            b';' => Token::from_byte(TokenKind::Semicolon, b';'),
            b'(' => Token::from_byte(TokenKind::LParen, b'('),
            b')' => Token::from_byte(TokenKind::RParen, b')'),
            b'{' => Token::from_byte(TokenKind::LBrace, b'{'),
            b'}' => Token::from_byte(TokenKind::RBrace, b'}'),
            b'"' => return self.read_string(),
            EOF_BYTE => return Token::eof(),
            ch if is_letter(ch) => return self.read_identifier(),
            ch if ch.is_ascii_digit() => return self.read_number(),
            ch => Token::from_byte(TokenKind::Illegal, ch),
        };

        self.cursor.advance();
        token
    }

    /// Reads an identifier or keyword starting at the current byte.
    fn read_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        while is_letter(self.cursor.ch()) || self.cursor.ch().is_ascii_digit() {
            self.cursor.advance();
        }
        let word = self.cursor.slice_from(start);
        Token::new(lookup_keyword(word), word)
    }

    /// Reads a run of decimal digits.
    fn read_number(&mut self) -> Token {
        let start = self.cursor.position();
        while self.cursor.ch().is_ascii_digit() {
            self.cursor.advance();
        }
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }

    /// Reads a string literal.
    ///
    /// The literal is the raw byte run between the quotes; there is no
    /// escape processing. An unterminated string is not a lexing error -
    /// the literal simply runs to end of input.
    fn read_string(&mut self) -> Token {
        self.cursor.advance();
        let start = self.cursor.position();
        while self.cursor.ch() != b'"' && self.cursor.ch() != EOF_BYTE {
            self.cursor.advance();
        }
        let literal = self.cursor.slice_from(start).to_string();
        if self.cursor.ch() == b'"' {
            self.cursor.advance();
        }
        Token::new(TokenKind::Str, literal)
    }
}

/// Make Lexer an iterator over tokens, stopping before `Eof`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

/// Identifier alphabet: ASCII letters and underscore.
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
