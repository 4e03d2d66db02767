//! String literal scanning (§4.1).
//!
//! String literals are single-line and double-quote delimited. Any byte
//! content is allowed inside except a bare `%` not immediately followed by
//! `x`, a raw newline before the closing quote, or running off the end of
//! the source — each of those is `INVALID_STRING`. The `%x` sequences
//! themselves are kept in the lexeme verbatim; decoding the format-spec
//! escapes is the code generator's concern (§4.4), not the lexer's.

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_string(&mut self) -> Result<Token<'a>, LexError<'a>> {
        let position = self.mark();
        let start = self.cursor.position();
        self.cursor.advance(); // opening quote

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::InvalidString { position });
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    break;
                }
                '\n' => return Err(LexError::InvalidString { position }),
                '%' => {
                    self.cursor.advance();
                    if self.cursor.current_char() != 'x' {
                        return Err(LexError::InvalidString { position });
                    }
                    self.cursor.advance();
                }
                _ => self.cursor.advance(),
            }
        }

        let slice = self.cursor.slice_from(start);
        Ok(Token::new(TokenKind::String, position, slice))
    }
}
