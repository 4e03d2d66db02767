//! The `Lexer` struct and its top-level dispatch loop (§4.1).

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use pgc_util::Position;

/// Converts a UTF-8 source buffer into a token stream.
///
/// Holds nothing but the scan cursor — each construct (identifiers and
/// keywords, numbers, strings, block comments, operators) has its own
/// lexing method in a sibling module of this one, dispatched on the current
/// character in [`next_token`](Lexer::next_token).
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    pub(crate) fn mark(&self) -> Position {
        Position::new(self.cursor.line(), self.cursor.column())
    }

    /// Tokenizes the whole source, stopping at the first lexical error —
    /// the tokenizer does not recover or resynchronize (§4.1). On success
    /// the returned vector ends with exactly one `Eof` token and no other
    /// token kind appears after it (§8).
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, LexError<'a>> {
        let mut tokens = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, self.mark(), ""));
                log::debug!("lexed {} tokens", tokens.len());
                return Ok(tokens);
            }

            let token = self.next_token()?;
            log::trace!("{:?} {:?}", token.kind, token.slice);
            tokens.push(token);
        }
    }

    fn next_token(&mut self) -> Result<Token<'a>, LexError<'a>> {
        let c = self.cursor.current_char();

        if c.is_ascii_alphabetic() {
            return self.lex_word();
        }
        if c.is_ascii_digit() {
            return self.lex_number();
        }
        if c == '"' {
            return self.lex_string();
        }
        if c == '>' && self.cursor.peek_char() == '@' {
            return self.lex_block_comment();
        }

        self.lex_operator()
    }
}
