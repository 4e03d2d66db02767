//! Block comment scanning (§4.1).
//!
//! Comments open with `>@` and close with `@<`. The opener must be
//! immediately followed by a line ending and the closer must be immediately
//! preceded by one — which means a single-line `>@ ... @<` comment is
//! rejected as malformed. §9 flags this as deliberate reference behavior,
//! not a bug to "fix" here.

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

fn is_line_ending(c: char) -> bool {
    matches!(c, '\r' | '\n')
}

impl<'a> Lexer<'a> {
    /// Called once the cursor has confirmed `>@` is next; consumes both
    /// opener characters and everything through the matching `@<`.
    pub(crate) fn lex_block_comment(&mut self) -> Result<Token<'a>, LexError<'a>> {
        let position = self.mark();
        let start = self.cursor.position();
        self.cursor.advance(); // '>'
        self.cursor.advance(); // '@'

        if !is_line_ending(self.cursor.current_char()) {
            return Err(LexError::InvalidComment { position });
        }

        let mut previous = '\0';
        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::InvalidComment { position });
            }

            let c = self.cursor.current_char();
            if c == '@' {
                if self.cursor.peek_char() != '<' {
                    return Err(LexError::InvalidComment { position });
                }
                if !is_line_ending(previous) {
                    return Err(LexError::InvalidComment { position });
                }
                self.cursor.advance(); // '@'
                self.cursor.advance(); // '<'
                break;
            }

            previous = c;
            self.cursor.advance();
        }

        let slice = self.cursor.slice_from(start);
        Ok(Token::new(TokenKind::Comment, position, slice))
    }
}
