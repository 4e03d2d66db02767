//! Statement-level parsing: declarations, assignments, I/O, conditionals,
//! and the post-condition loop (§4.2).

use crate::ast::*;
use crate::error::{Expected, ParseError};
use crate::Parser;
use pgc_lex::TokenKind;

const STMT_START: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::Read,
    TokenKind::Write,
    TokenKind::Writeln,
    TokenKind::If,
    TokenKind::Repeat,
];

impl<'a> Parser<'a> {
    /// Parses statements separated by `;` until the current token is one of
    /// `terminators` (§4.2's "statement lists shrink their backing arrays to
    /// exact length at ε-production time" — here, simply the length a `Vec`
    /// built with `push` already has).
    pub(crate) fn parse_stmt_list(
        &mut self,
        terminators: &[TokenKind],
    ) -> Result<StmtList<'a>, ParseError<'a>> {
        let mut stmts = Vec::new();
        while !terminators.contains(&self.current().kind) {
            let stmt = self.parse_stmt()?;
            // An `if` chain closes on its own `end`, consumed deep inside
            // `parse_if_tail`/`parse_else_stmt` — it carries no trailing `;`
            // the way every other statement does.
            if !matches!(stmt, Stmt::If(_)) {
                self.expect(TokenKind::Semicolon)?;
            }
            stmts.push(stmt);
        }
        stmts.shrink_to_fit();
        Ok(stmts)
    }

    fn parse_stmt(&mut self) -> Result<Stmt<'a>, ParseError<'a>> {
        match self.current().kind {
            TokenKind::Identifier => self.parse_decl_or_assign(),
            TokenKind::Read => self.parse_read_stmt(),
            TokenKind::Write | TokenKind::Writeln => self.parse_write_stmt(),
            TokenKind::If => Ok(Stmt::If(self.parse_if_stmt()?)),
            TokenKind::Repeat => self.parse_repeat_stmt(),
            _ => Err(ParseError::new(Expected::AnyOf(STMT_START), self.current())),
        }
    }

    /// `<ident> (, <ident>)* [= <expr>]` — a bare identifier list is a
    /// `VarDecl`; an `=` tail promotes it to an `AssignStmt` (§4.2's "promote
    /// `AssignStmt` to `VarDecl` when the optional `=expr` is absent" is
    /// realized here as choosing which node to build in the first place,
    /// rather than constructing one and mutating it into the other).
    fn parse_decl_or_assign(&mut self) -> Result<Stmt<'a>, ParseError<'a>> {
        let idents = self.parse_ident_list()?;

        if self.current().kind == TokenKind::Eq {
            self.advance();
            let expr = self.parse_expr()?;
            Ok(Stmt::Assign(AssignStmt { idents, expr }))
        } else {
            Ok(Stmt::VarDecl(VarDecl { idents }))
        }
    }

    fn parse_ident_list(&mut self) -> Result<IdentList<'a>, ParseError<'a>> {
        let mut idents = vec![Ident::new(self.expect(TokenKind::Identifier)?)];
        while self.current().kind == TokenKind::Comma {
            self.advance();
            idents.push(Ident::new(self.expect(TokenKind::Identifier)?));
        }
        idents.shrink_to_fit();
        Ok(idents)
    }

    fn parse_read_stmt(&mut self) -> Result<Stmt<'a>, ParseError<'a>> {
        self.expect(TokenKind::Read)?;
        self.expect(TokenKind::LParen)?;
        let mut inputs = vec![self.parse_input_arg()?];
        while self.current().kind == TokenKind::Comma {
            self.advance();
            inputs.push(self.parse_input_arg()?);
        }
        self.expect(TokenKind::RParen)?;
        inputs.shrink_to_fit();
        Ok(Stmt::Read(ReadStmt { inputs }))
    }

    fn parse_input_arg(&mut self) -> Result<InputArg<'a>, ParseError<'a>> {
        if self.current().kind == TokenKind::String {
            let tok = self.advance();
            let prompt = Some(Literal {
                tok,
                value: LiteralValue::Str(tok.slice),
            });
            self.expect(TokenKind::Comma)?;
            let ident = Ident::new(self.expect(TokenKind::Identifier)?);
            Ok(InputArg { prompt, ident })
        } else {
            let ident = Ident::new(self.expect(TokenKind::Identifier)?);
            Ok(InputArg { prompt: None, ident })
        }
    }

    fn parse_write_stmt(&mut self) -> Result<Stmt<'a>, ParseError<'a>> {
        let keyword = match self.current().kind {
            TokenKind::Write => {
                self.advance();
                WriteKeyword::Write
            }
            TokenKind::Writeln => {
                self.advance();
                WriteKeyword::Writeln
            }
            _ => unreachable!("parse_write_stmt only dispatched on write/writeln"),
        };
        self.expect(TokenKind::LParen)?;
        let mut exprs = vec![self.parse_expr()?];
        while self.current().kind == TokenKind::Comma {
            self.advance();
            exprs.push(self.parse_expr()?);
        }
        self.expect(TokenKind::RParen)?;
        exprs.shrink_to_fit();
        Ok(Stmt::Write(WriteStmt { keyword, exprs }))
    }

    /// `if (<expr>) <stmts> <elif-or-else-or-end>`. The `end` that closes
    /// the whole chain is consumed deep in the recursion, by whichever of
    /// `parse_if_tail`/`parse_else_stmt` turns out to be the last link —
    /// never by this function itself.
    fn parse_if_stmt(&mut self) -> Result<IfStmt<'a>, ParseError<'a>> {
        self.expect(TokenKind::If)?;
        self.parse_if_tail(true)
    }

    fn parse_elif_stmt(&mut self) -> Result<IfStmt<'a>, ParseError<'a>> {
        self.expect(TokenKind::Elif)?;
        self.parse_if_tail(false)
    }

    fn parse_if_tail(&mut self, is_root: bool) -> Result<IfStmt<'a>, ParseError<'a>> {
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_stmt_list(&[TokenKind::Elif, TokenKind::Else, TokenKind::End])?;

        let else_stmt = match self.current().kind {
            TokenKind::Elif => Some(Box::new(self.parse_elif_stmt()?)),
            TokenKind::Else => Some(Box::new(self.parse_else_stmt()?)),
            TokenKind::End => {
                self.expect(TokenKind::End)?;
                None
            }
            _ => {
                return Err(ParseError::new(
                    Expected::AnyOf(&[TokenKind::Elif, TokenKind::Else, TokenKind::End]),
                    self.current(),
                ))
            }
        };

        Ok(IfStmt {
            cond: Some(cond),
            body,
            else_stmt,
            is_root,
        })
    }

    fn parse_else_stmt(&mut self) -> Result<IfStmt<'a>, ParseError<'a>> {
        self.expect(TokenKind::Else)?;
        let body = self.parse_stmt_list(&[TokenKind::End])?;
        self.expect(TokenKind::End)?;
        Ok(IfStmt {
            cond: None,
            body,
            else_stmt: None,
            is_root: false,
        })
    }

    /// `repeat <stmts> while|until (<expr>)` — a post-condition loop with no
    /// closing keyword of its own; the trailing `(<expr>)` is what ends it.
    fn parse_repeat_stmt(&mut self) -> Result<Stmt<'a>, ParseError<'a>> {
        self.expect(TokenKind::Repeat)?;
        let body = self.parse_stmt_list(&[TokenKind::While, TokenKind::Until])?;
        let keyword = match self.current().kind {
            TokenKind::While => {
                self.advance();
                RepeatKeyword::While
            }
            TokenKind::Until => {
                self.advance();
                RepeatKeyword::Until
            }
            _ => {
                return Err(ParseError::new(
                    Expected::AnyOf(&[TokenKind::While, TokenKind::Until]),
                    self.current(),
                ))
            }
        };
        self.expect(TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        Ok(Stmt::Repeat(RepeatStmt {
            body,
            keyword,
            expr,
        }))
    }
}
