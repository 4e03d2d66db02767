//! Punctuation and operator scanning (§4.1).
//!
//! `; , ( ) < + - * /` are single-character tokens. `&&`, `||`, `==`, `!=`
//! require their paired second character — a lone `&` or `|` is
//! `INVALID_SYMBOL`, while a lone `=`, `!`, or `>` is a valid token on its
//! own. `>@` (block-comment open) is dispatched before this function runs,
//! so a bare `>` reaching here is always the `Gt` token.

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_operator(&mut self) -> Result<Token<'a>, LexError<'a>> {
        let position = self.mark();
        let start = self.cursor.position();
        let c = self.cursor.current_char();

        let kind = match c {
            ';' => {
                self.cursor.advance();
                TokenKind::Semicolon
            }
            ',' => {
                self.cursor.advance();
                TokenKind::Comma
            }
            '(' => {
                self.cursor.advance();
                TokenKind::LParen
            }
            ')' => {
                self.cursor.advance();
                TokenKind::RParen
            }
            '<' => {
                self.cursor.advance();
                TokenKind::Lt
            }
            '>' => {
                self.cursor.advance();
                TokenKind::Gt
            }
            '+' => {
                self.cursor.advance();
                TokenKind::Plus
            }
            '-' => {
                self.cursor.advance();
                TokenKind::Minus
            }
            '*' => {
                self.cursor.advance();
                TokenKind::Star
            }
            '/' => {
                self.cursor.advance();
                TokenKind::Slash
            }
            '=' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                }
            }
            '!' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }
            '&' => {
                self.cursor.advance();
                if self.cursor.match_char('&') {
                    TokenKind::AndAnd
                } else {
                    let slice = self.cursor.slice_from(start);
                    return Err(LexError::InvalidSymbol {
                        lexeme: slice,
                        position,
                    });
                }
            }
            '|' => {
                self.cursor.advance();
                if self.cursor.match_char('|') {
                    TokenKind::OrOr
                } else {
                    let slice = self.cursor.slice_from(start);
                    return Err(LexError::InvalidSymbol {
                        lexeme: slice,
                        position,
                    });
                }
            }
            _ => {
                self.cursor.advance();
                let slice = self.cursor.slice_from(start);
                return Err(LexError::InvalidSymbol {
                    lexeme: slice,
                    position,
                });
            }
        };

        let slice = self.cursor.slice_from(start);
        Ok(Token::new(kind, position, slice))
    }
}
