//! pgc-gen — the CIL/MSIL text code generator (§4.4).
//!
//! Walks a semantically-checked AST and emits a complete `ilasm`-ready
//! assembly as one `String`. Every arithmetic value lives on the evaluation
//! stack as `float64`; values only narrow to their declared kind (`conv.i8`
//! for INT) right before being stored or consumed by a `Console` call. The
//! `RepeatStmt` branch deliberately emits nothing: the AST carries the loop,
//! but there is no CIL lowering for it, matching the reference compiler's
//! own gap rather than inventing one.

mod emitter;
mod kind;
mod label;

use emitter::Emitter;
use kind::infer_kind;
use label::LabelStack;
use pgc_par::ast::{
    AssignStmt, BinOp, Expr, IfStmt, Literal, LiteralValue, Main, ReadStmt, RepeatStmt, Stmt,
    UnOp, VarDecl, WriteKeyword, WriteStmt,
};
use pgc_util::EntityKind;

const PROLOGUE: &str = ".assembly extern mscorlib {}\r\n\
.assembly _obj_code {}\r\n\
.module _obj_code.exe\r\n\
\r\n\
.class public Main extends [mscorlib]System.Object\r\n\
{\r\n\
\t.method public static void main() cil managed\r\n\
\t{\r\n\
\t\t.entrypoint\r\n";

const EPILOGUE: &str = "\t\tret\r\n\t}\r\n}\r\n";

/// Emits the complete CIL text for `main`.
pub fn generate(main: &Main<'_>) -> String {
    let mut out = Emitter::new();
    out.raw(PROLOGUE);

    let mut gen = Generator {
        out,
        labels: LabelStack::new(),
    };
    gen.gen_stmts(&main.body);
    gen.out.raw(EPILOGUE);

    log::debug!("emitted CIL for {} top-level statement(s)", main.body.len());
    gen.out.into_string()
}

struct Generator {
    out: Emitter,
    labels: LabelStack,
}

impl Generator {
    fn gen_stmts(&mut self, stmts: &[Stmt<'_>]) {
        for stmt in stmts {
            self.gen_stmt(stmt);
        }
    }

    fn gen_stmt(&mut self, stmt: &Stmt<'_>) {
        match stmt {
            Stmt::VarDecl(decl) => self.gen_var_decl(decl),
            Stmt::Assign(assign) => self.gen_assign(assign),
            Stmt::Read(read) => self.gen_read(read),
            Stmt::Write(write) => self.gen_write(write),
            Stmt::If(if_stmt) => self.gen_if(if_stmt),
            Stmt::Repeat(repeat) => self.gen_repeat(repeat),
        }
    }

    fn gen_var_decl(&mut self, decl: &VarDecl<'_>) {
        for ident in &decl.idents {
            self.out.instr(&format!(
                ".locals ({} {})",
                ident.entity_kind.cil_type_name(),
                ident.name()
            ));
        }
    }

    fn gen_assign(&mut self, assign: &AssignStmt<'_>) {
        let kind = self.gen_expr(&assign.expr);
        if kind == EntityKind::Int {
            self.out.instr("conv.i8");
        }
        for _ in 1..assign.idents.len() {
            self.out.instr("dup");
        }
        for ident in &assign.idents {
            self.out.instr(&format!("stloc {}", ident.name()));
        }
    }

    fn gen_read(&mut self, read: &ReadStmt<'_>) {
        for input in &read.inputs {
            if let Some(prompt) = &input.prompt {
                self.out.instr(&format!("ldstr {}", prompt.tok.slice));
                self.out
                    .instr("call void [mscorlib]System.Console::Write(string)");
            }
            self.out
                .instr("call string [mscorlib]System.Console::ReadLine()");
            let kind = input.ident.entity_kind;
            if let Some(class) = kind.parse_class_name() {
                self.out.instr(&format!(
                    "call {} [mscorlib]System.{}::Parse(string)",
                    kind.cil_type_name(),
                    class
                ));
            }
            self.out.instr(&format!("stloc {}", input.ident.name()));
        }
    }

    fn gen_write(&mut self, write: &WriteStmt<'_>) {
        for expr in &write.exprs {
            let kind = self.gen_expr(expr);
            if kind == EntityKind::Int {
                self.out.instr("conv.i8");
            }
            self.out.instr(&format!(
                "call void [mscorlib]System.Console::Write({})",
                kind.cil_type_name()
            ));
        }
        if write.keyword == WriteKeyword::Writeln {
            self.out
                .instr("call void [mscorlib]System.Console::WriteLine()");
        }
    }

    /// The root of an `if`/`elif`/`else` chain owns the shared `end_label`:
    /// it pushes the label before walking the chain and emits it once the
    /// whole chain is done. Every branch below it just receives `end_label`
    /// and emits a `br` to it.
    fn gen_if(&mut self, if_stmt: &IfStmt<'_>) {
        let end_label = self.labels.push();
        self.gen_if_branch(if_stmt, end_label);
        self.out.label(&format!("IL_{end_label}"));
        self.labels.pop();
    }

    fn gen_if_branch(&mut self, if_stmt: &IfStmt<'_>, end_label: u32) {
        match &if_stmt.cond {
            Some(cond) => {
                self.gen_expr(cond);
                let else_label = self.labels.push();
                let if_label = self.labels.push();
                self.out.instr(&format!("brtrue IL_{if_label}"));
                self.out.instr(&format!("br IL_{else_label}"));
                self.out.label(&format!("IL_{if_label}"));
                self.gen_stmts(&if_stmt.body);
                self.out.instr(&format!("br IL_{end_label}"));
                self.out.label(&format!("IL_{else_label}"));
                self.labels.pop();
                self.labels.pop();
                if let Some(next) = &if_stmt.else_stmt {
                    self.gen_if_branch(next, end_label);
                }
            }
            None => self.gen_stmts(&if_stmt.body),
        }
    }

    fn gen_repeat(&mut self, _repeat: &RepeatStmt<'_>) {
        // No CIL lowering for repeat/until — see the module doc comment.
    }

    fn gen_expr(&mut self, expr: &Expr<'_>) -> EntityKind {
        let kind = infer_kind(expr);
        match expr {
            Expr::Ident(ident) => {
                self.out.instr(&format!("ldloc {}", ident.name()));
                if ident.entity_kind == EntityKind::Int {
                    self.out.instr("conv.r8");
                }
            }
            Expr::Literal(lit) => self.gen_literal(lit),
            Expr::Paren(p) => {
                self.gen_expr(&p.inner);
            }
            Expr::Unary(u) => match u.op {
                UnOp::Not => {
                    self.gen_expr(&u.operand);
                    self.out.instr("not");
                }
                UnOp::Neg => {
                    self.gen_expr(&u.operand);
                    self.out.instr("ldc.r8 -1.0");
                    self.out.instr("mul");
                }
                UnOp::Plus => {
                    self.gen_expr(&u.operand);
                }
            },
            Expr::Binary(b) => {
                self.gen_expr(&b.left);
                self.gen_expr(&b.right);
                let instr = match b.op {
                    BinOp::Add => "add",
                    BinOp::Sub => "sub",
                    BinOp::Mul => "mul",
                    BinOp::Div => "div",
                    BinOp::Eq => "ceq",
                    BinOp::NotEq => "cne",
                    BinOp::Gt => "cgt",
                    BinOp::Lt => "clt",
                    BinOp::And => "and",
                    BinOp::Or => "or",
                };
                self.out.instr(instr);
            }
        }
        kind
    }

    fn gen_literal(&mut self, lit: &Literal<'_>) {
        match lit.value {
            LiteralValue::Int(n) => {
                self.out.instr(&format!("ldc.i8 {n}"));
                self.out.instr("conv.r8");
            }
            LiteralValue::Float(f) => {
                self.out.instr(&format!("ldc.r8 {}", format_float(f)));
            }
            LiteralValue::Str(_) => {
                self.out.instr(&format!("ldstr {}", lit.tok.slice));
            }
            LiteralValue::Bool(b) => {
                self.out.instr(&format!("ldc.i4 {}", b as u8));
                self.out.instr("conv.r8");
            }
        }
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
