//! Parser error type (§4.2, §7).

use pgc_lex::{Token, TokenKind};
use pgc_util::Position;
use std::fmt;
use thiserror::Error;

/// What the parser was looking for when it hit a token it couldn't use.
/// Non-terminals are rendered either as the concrete set of terminals that
/// would have been legal there, or — for anything in the expression family
/// — as the literal word `"expressão"` (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    AnyOf(&'static [TokenKind]),
    Expression,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{kind}"),
            Expected::AnyOf(kinds) => {
                let rendered: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
                write!(f, "{}", rendered.join(" "))
            }
            Expected::Expression => write!(f, "expressão"),
        }
    }
}

/// A syntax error: the parser reached a point in a rule where the current
/// token did not match what that rule (or the precomputed table, in the
/// reference) allows — §4.2's `UNEXPECTED_TOKEN` and `INVALID_RULE` both
/// collapse to this single shape, since both render through the same
/// "found X, expected Y" template (§6/§7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("encontrado {found} esperado {expected}")]
pub struct ParseError<'a> {
    pub expected: Expected,
    pub found: Token<'a>,
}

impl<'a> ParseError<'a> {
    pub fn new(expected: Expected, found: Token<'a>) -> Self {
        Self { expected, found }
    }

    pub fn position(&self) -> Position {
        self.found.position
    }
}
