//! Semantic error type (§4.3, §7).

use pgc_par::ast::Ident;
use pgc_util::Position;
use thiserror::Error;

/// A semantic error names exactly one offending identifier. There is no
/// accumulation across the walk — the first one found stops the checker.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SemError<'a> {
    #[error("{} já declarado", .0.name())]
    Redeclared(Ident<'a>),
    #[error("{} não declarado", .0.name())]
    Undeclared(Ident<'a>),
}

impl<'a> SemError<'a> {
    pub fn position(&self) -> Position {
        match self {
            SemError::Redeclared(ident) | SemError::Undeclared(ident) => ident.tok.position,
        }
    }
}
