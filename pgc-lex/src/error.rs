//! Tokenizer error kinds (§4.1, §7).

use pgc_util::Position;
use thiserror::Error;

/// Everything that can go wrong while producing a token stream. The
/// tokenizer stops at the first error — there is no recovery or
/// resynchronization (§4.1's error model) — so one value is enough to
/// describe the failure.
///
/// Variants carry the positional context the §7 message templates need:
/// most carry the offending lexeme, but the string/comment variants
/// deliberately do not, matching the template that omits the lexeme for
/// those two phases of error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexError<'a> {
    #[error("símbolo inválido")]
    InvalidSymbol { lexeme: &'a str, position: Position },

    #[error("palavra reservada inválida")]
    InvalidKeyword { lexeme: &'a str, position: Position },

    #[error("identificador inválido")]
    InvalidIdent { lexeme: &'a str, position: Position },

    #[error("constante_string inválida")]
    InvalidString { position: Position },

    #[error("comentário de bloco inválido ou não finalizado")]
    InvalidComment { position: Position },

    #[error("out of memory growing the token buffer")]
    OutOfMemory,
}

impl<'a> LexError<'a> {
    /// The line/column to report the error at, or `None` for
    /// `OutOfMemory`, which has no associated source position.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::InvalidSymbol { position, .. }
            | LexError::InvalidKeyword { position, .. }
            | LexError::InvalidIdent { position, .. }
            | LexError::InvalidString { position }
            | LexError::InvalidComment { position } => Some(*position),
            LexError::OutOfMemory => None,
        }
    }

    /// The offending lexeme, when the §7 message template calls for one.
    pub fn lexeme(&self) -> Option<&'a str> {
        match self {
            LexError::InvalidSymbol { lexeme, .. }
            | LexError::InvalidKeyword { lexeme, .. }
            | LexError::InvalidIdent { lexeme, .. } => Some(lexeme),
            _ => None,
        }
    }
}
