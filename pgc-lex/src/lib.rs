//! pgc-lex — the tokenizer (§4.1).
//!
//! Converts a UTF-8 source buffer into an ordered token stream terminated by
//! exactly one `Eof` token, or stops at the first lexical error. Whitespace
//! is discarded during scanning; comments are lexed as `Comment` tokens and
//! it is the parser's job to skip them (§4.2 step 1).
//!
//! ```
//! use pgc_lex::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("main end").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Main);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod cursor;
mod error;
mod keyword;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::{literal_float_value, literal_int_value, Lexer};
pub use token::{Token, TokenKind};
