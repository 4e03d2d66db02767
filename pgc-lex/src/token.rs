//! Token kinds and the `Token` value type (§3).

use pgc_util::Position;
use std::fmt;

/// The kind of a single token: invalid, EOF, the five literal kinds, the
/// fixed keyword set, and the operator/punctuation set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    Identifier,
    Int,
    Float,
    String,
    Comment,

    // keywords
    Main,
    End,
    If,
    Elif,
    Else,
    True,
    False,
    Read,
    Write,
    Writeln,
    Repeat,
    Until,
    While,

    // punctuation / operators
    Semicolon,
    Comma,
    LParen,
    RParen,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,
    AndAnd,
    OrOr,
    EqEq,
    NotEq,
    Eq,
    Bang,

    Eof,
    Invalid,
}

impl fmt::Display for TokenKind {
    /// The human-readable form used in "expected X" diagnostics. The
    /// reference compiler keeps a parallel `token_strings[]` table for this;
    /// here it is just the `Display` impl of the kind itself, so the parser
    /// never needs a second name table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Identifier => "identificador",
            TokenKind::Int => "constante_int",
            TokenKind::Float => "constante_float",
            TokenKind::String => "constante_string",
            TokenKind::Comment => "comentário",
            TokenKind::Main => "main",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::Writeln => "writeln",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::While => "while",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Eq => "=",
            TokenKind::Bang => "!",
            TokenKind::Eof => "EOF",
            TokenKind::Invalid => "inválido",
        };
        f.write_str(s)
    }
}

/// A single lexed token: its kind, source position, and the lexeme slice it
/// was produced from. The slice borrows directly from the source buffer
/// handed to the lexer — tokens never own or copy their text, and the
/// source buffer must outlive every token built from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub position: Position,
    pub slice: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, position: Position, slice: &'a str) -> Self {
        Self {
            kind,
            position,
            slice,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
