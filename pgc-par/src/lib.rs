//! pgc-par — the LL(1) parser and AST builder (§4.2).
//!
//! Consumes the token stream `pgc-lex` produces and builds a rooted [`Main`]
//! AST, implemented as a predictive recursive-descent parser: each
//! non-terminal in the grammar is one function, and the "table lookup" the
//! reference implementation does explicitly is just which `match` arm that
//! function's caller takes on the current token kind. This is the same
//! technique the teacher workspace's own parser uses for a much larger
//! grammar; for the small, unambiguous grammar here it is equivalent to the
//! reference's `(non-terminal × terminal) → rule` matrix without needing to
//! carry the matrix itself.
//!
//! Expressions are built bottom-up (§9): each precedence level parses its
//! next-higher level as a left operand, then folds in a left-associative
//! chain of same-level operators. There is no "allocate a placeholder
//! `BinaryExpr`, then free it if no operator follows" step — if no operator
//! follows, the left operand was simply never wrapped.

pub mod ast;
pub mod error;
mod expr;
mod stmt;

use ast::Main;
use error::ParseError;
use pgc_lex::{Token, TokenKind};

pub use error::Expected;

/// A predictive, single-token-lookahead parser over an already-tokenized
/// source. Holds the full token vector (produced once by `pgc-lex`) plus a
/// cursor; comments are skipped transparently by [`Parser::current`] rather
/// than being filtered out of the vector up front, so their source position
/// is still available if a caller ever wants it.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Parses a complete token stream into a [`Main`] AST. `tokens` must end
    /// with exactly one `Eof` token, as `pgc_lex::Lexer::tokenize` guarantees.
    pub fn parse(tokens: Vec<Token<'a>>) -> Result<Main<'a>, ParseError<'a>> {
        let mut parser = Self { tokens, pos: 0 };
        parser.expect(TokenKind::Main)?;
        let body = parser.parse_stmt_list(&[TokenKind::End])?;
        parser.expect(TokenKind::End)?;
        parser.expect(TokenKind::Eof)?;
        log::debug!("parsed {} top-level statement(s)", body.len());
        Ok(Main { body })
    }

    /// Skips any comment tokens sitting at the cursor (§4.2 step 1).
    fn skip_comments(&mut self) {
        while self.tokens[self.pos].kind == TokenKind::Comment {
            self.pos += 1;
        }
    }

    /// The token under the cursor, with any leading comments skipped first.
    fn current(&mut self) -> Token<'a> {
        self.skip_comments();
        self.tokens[self.pos]
    }

    /// Consumes and returns the current token. Never advances past `Eof`.
    fn advance(&mut self) -> Token<'a> {
        let tok = self.current();
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    /// Consumes the current token if it matches `kind`, else reports a
    /// syntax error naming `kind` as what was expected.
    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError<'a>> {
        let tok = self.current();
        if tok.kind == kind {
            self.pos += 1;
            Ok(tok)
        } else {
            Err(ParseError::new(error::Expected::Token(kind), tok))
        }
    }
}
