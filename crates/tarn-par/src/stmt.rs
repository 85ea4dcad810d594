//! Statement parsing - let, return, expression statements, and blocks.

use crate::ast::{Block, Ident, Stmt};
use crate::{Parser, Precedence};
use tarn_lex::TokenKind;

impl<'a> Parser<'a> {
    /// Parse a statement
    ///
    /// Dispatch on the current token: `let` and `return` have dedicated
    /// rules, anything else is an expression statement. Each rule consumes
    /// an optional trailing `;`.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur_token().kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse a let statement: `let IDENT = <expr> ;?`
    fn parse_let_statement(&mut self) -> Option<Stmt> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Ident::new(self.cur_token().literal.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Stmt::Let { name, value })
    }

    /// Parse a return statement: `return <expr> ;?`
    fn parse_return_statement(&mut self) -> Option<Stmt> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Stmt::Return { value })
    }

    /// Parse a bare expression in statement position.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Stmt::Expr { expr })
    }

    /// Parse a block: statements until `}` or end of input.
    ///
    /// Called with the current token on `{`; leaves the current token on
    /// the closing `}` (or `Eof` for an unterminated block).
    pub(crate) fn parse_block(&mut self) -> Block {
        let mut stmts = Vec::new();

        self.next_token();

        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                stmts.push(stmt);
            }
            self.next_token();
        }

        Block::new(stmts)
    }
}
