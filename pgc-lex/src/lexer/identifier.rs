//! Identifier/keyword scanning and classification (§4.1).

use super::core::Lexer;
use crate::error::LexError;
use crate::keyword;
use crate::token::{Token, TokenKind};

/// The three ways a scanned word can resolve, plus the two invalid shapes.
enum WordClass {
    Identifier,
    Keyword(TokenKind),
    InvalidIdentifier,
    InvalidKeyword,
}

fn looks_like_entity_prefix(first_byte: u8) -> bool {
    matches!(first_byte, b'i' | b'f' | b'b' | b's')
}

fn has_adjacent_uppercase(lexeme: &str) -> bool {
    lexeme
        .as_bytes()
        .windows(2)
        .any(|w| w[0].is_ascii_uppercase() && w[1].is_ascii_uppercase())
}

/// Length ≥3; `s[1] == '_'`; `s[0]` one of `i f b s`; `s[2]` a letter; every
/// character from index 3 onward alphanumeric; no two adjacent uppercase
/// letters anywhere in the lexeme.
fn is_identifier_shaped(lexeme: &str) -> bool {
    let bytes = lexeme.as_bytes();
    if bytes.len() < 3 {
        return false;
    }
    if bytes[1] != b'_' {
        return false;
    }
    if !looks_like_entity_prefix(bytes[0]) {
        return false;
    }
    if !bytes[2].is_ascii_alphabetic() {
        return false;
    }
    if lexeme[3..].bytes().any(|b| !b.is_ascii_alphanumeric()) {
        return false;
    }
    !has_adjacent_uppercase(lexeme)
}

/// First character lowercase; no `_`, digit, or uppercase letter anywhere in
/// the lexeme (keywords are plain all-lowercase words).
fn is_keyword_shaped(lexeme: &str) -> bool {
    let bytes = lexeme.as_bytes();
    bytes[0].is_ascii_lowercase()
        && !bytes
            .iter()
            .any(|&b| b == b'_' || b.is_ascii_digit() || b.is_ascii_uppercase())
}

fn classify_word(lexeme: &str) -> WordClass {
    if is_identifier_shaped(lexeme) {
        return WordClass::Identifier;
    }
    if is_keyword_shaped(lexeme) {
        return match keyword::lookup(lexeme) {
            Some(kind) => WordClass::Keyword(kind),
            None => WordClass::InvalidKeyword,
        };
    }
    if looks_like_entity_prefix(lexeme.as_bytes()[0]) {
        WordClass::InvalidIdentifier
    } else {
        WordClass::InvalidKeyword
    }
}

fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Scans a maximal `[A-Za-z][A-Za-z0-9_]*` run and classifies it as an
    /// identifier, a keyword, or one of the two malformed-word errors.
    pub(crate) fn lex_word(&mut self) -> Result<Token<'a>, LexError<'a>> {
        let position = self.mark();
        let start = self.cursor.position();
        self.cursor.advance();
        while is_word_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let slice = self.cursor.slice_from(start);

        match classify_word(slice) {
            WordClass::Identifier => Ok(Token::new(TokenKind::Identifier, position, slice)),
            WordClass::Keyword(kind) => Ok(Token::new(kind, position, slice)),
            WordClass::InvalidIdentifier => Err(LexError::InvalidIdent {
                lexeme: slice,
                position,
            }),
            WordClass::InvalidKeyword => Err(LexError::InvalidKeyword {
                lexeme: slice,
                position,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lexer;
    use crate::error::LexError;
    use crate::token::TokenKind;

    fn lex_one(source: &str) -> Result<crate::token::Token<'_>, LexError<'_>> {
        Lexer::new(source).lex_word()
    }

    #[test]
    fn well_formed_identifier_is_accepted() {
        let tok = lex_one("i_count").unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.slice, "i_count");
    }

    #[test]
    fn default_prefix_is_string_shaped_identifier() {
        let tok = lex_one("s_name").unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
    }

    #[test]
    fn known_keyword_is_accepted() {
        let tok = lex_one("writeln").unwrap();
        assert_eq!(tok.kind, TokenKind::Writeln);
    }

    #[test]
    fn entity_prefixed_malformed_word_is_invalid_identifier() {
        let err = lex_one("iBad").unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidIdent {
                lexeme: "iBad",
                position: pgc_util::Position::START,
            }
        );
    }

    #[test]
    fn non_prefixed_keyword_shaped_word_is_invalid_keyword() {
        let err = lex_one("elseif").unwrap_err();
        assert!(matches!(err, LexError::InvalidKeyword { lexeme: "elseif", .. }));
    }

    #[test]
    fn adjacent_uppercase_rejects_identifier_shape() {
        let err = lex_one("i_ABcd").unwrap_err();
        assert!(matches!(err, LexError::InvalidIdent { .. }));
    }
}
