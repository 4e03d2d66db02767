//! pgc-sem — the semantic checker (§4.3).
//!
//! Walks the AST `pgc-par` builds exactly once, tracking declared
//! identifiers in a single flat, append-only list — there is no block
//! scoping in this language, so a `ScopeTree` of nested ribs would model
//! structure the grammar doesn't have. Stops at the first error found, same
//! as the lexer and parser before it.

pub mod error;
mod scope;

use error::SemError;
use pgc_par::ast::{
    AssignStmt, Expr, Ident, IfStmt, Main, ReadStmt, RepeatStmt, Stmt, VarDecl, WriteStmt,
};
use scope::DeclaredIdents;

/// Checks `main`, returning the first semantic error encountered in
/// AST-walk order.
pub struct Checker<'a> {
    declared: DeclaredIdents<'a>,
}

impl<'a> Checker<'a> {
    pub fn new() -> Self {
        Self {
            declared: DeclaredIdents::new(),
        }
    }

    pub fn check(mut self, main: &Main<'a>) -> Result<(), SemError<'a>> {
        self.check_stmts(&main.body)?;
        log::debug!("semantic check passed for {} top-level statement(s)", main.body.len());
        Ok(())
    }

    fn check_stmts(&mut self, stmts: &[Stmt<'a>]) -> Result<(), SemError<'a>> {
        for stmt in stmts {
            self.check_stmt(stmt)?;
        }
        Ok(())
    }

    fn check_stmt(&mut self, stmt: &Stmt<'a>) -> Result<(), SemError<'a>> {
        match stmt {
            Stmt::VarDecl(decl) => self.check_var_decl(decl),
            Stmt::Assign(assign) => self.check_assign(assign),
            Stmt::Read(read) => self.check_read(read),
            Stmt::Write(write) => self.check_write(write),
            Stmt::If(if_stmt) => self.check_if(if_stmt),
            Stmt::Repeat(repeat) => self.check_repeat(repeat),
        }
    }

    fn check_var_decl(&mut self, decl: &VarDecl<'a>) -> Result<(), SemError<'a>> {
        for ident in &decl.idents {
            self.declare(*ident)?;
        }
        Ok(())
    }

    fn check_assign(&mut self, assign: &AssignStmt<'a>) -> Result<(), SemError<'a>> {
        for ident in &assign.idents {
            self.require_declared(*ident)?;
        }
        self.check_expr(&assign.expr)
    }

    fn check_read(&mut self, read: &ReadStmt<'a>) -> Result<(), SemError<'a>> {
        for input in &read.inputs {
            self.require_declared(input.ident)?;
        }
        Ok(())
    }

    fn check_write(&mut self, write: &WriteStmt<'a>) -> Result<(), SemError<'a>> {
        for expr in &write.exprs {
            self.check_expr(expr)?;
        }
        Ok(())
    }

    fn check_if(&mut self, if_stmt: &IfStmt<'a>) -> Result<(), SemError<'a>> {
        if let Some(cond) = &if_stmt.cond {
            self.check_expr(cond)?;
        }
        self.check_stmts(&if_stmt.body)?;
        if let Some(next) = &if_stmt.else_stmt {
            self.check_if(next)?;
        }
        Ok(())
    }

    fn check_repeat(&mut self, repeat: &RepeatStmt<'a>) -> Result<(), SemError<'a>> {
        self.check_expr(&repeat.expr)?;
        self.check_stmts(&repeat.body)
    }

    fn check_expr(&mut self, expr: &Expr<'a>) -> Result<(), SemError<'a>> {
        match expr {
            Expr::Binary(b) => {
                self.check_expr(&b.left)?;
                self.check_expr(&b.right)
            }
            Expr::Unary(u) => self.check_expr(&u.operand),
            Expr::Paren(p) => self.check_expr(&p.inner),
            Expr::Ident(ident) => self.require_declared(*ident),
            Expr::Literal(_) => Ok(()),
        }
    }

    fn declare(&mut self, ident: Ident<'a>) -> Result<(), SemError<'a>> {
        if self.declared.declare(ident.name()) {
            Ok(())
        } else {
            Err(SemError::Redeclared(ident))
        }
    }

    fn require_declared(&self, ident: Ident<'a>) -> Result<(), SemError<'a>> {
        if self.declared.is_declared(ident.name()) {
            Ok(())
        } else {
            Err(SemError::Undeclared(ident))
        }
    }
}

impl<'a> Default for Checker<'a> {
    fn default() -> Self {
        Self::new()
    }
}
