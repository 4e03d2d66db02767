//! Expression-kind inference (§4.4).
//!
//! Informs the `conv.r8`/`conv.i8` conversions the emitter inserts: `+ - *`
//! on two ints stay INT, any other arithmetic combination is FLOAT, `/` is
//! always FLOAT, comparisons take the kind of their left operand, and the
//! logical operators are always BOOL. Parens and unaries propagate their
//! operand's kind, except `!` which is always BOOL.

use pgc_par::ast::{BinOp, Expr, LiteralValue, UnOp};
use pgc_util::EntityKind;

pub fn infer_kind(expr: &Expr<'_>) -> EntityKind {
    match expr {
        Expr::Ident(ident) => ident.entity_kind,
        Expr::Literal(lit) => match lit.value {
            LiteralValue::Int(_) => EntityKind::Int,
            LiteralValue::Float(_) => EntityKind::Float,
            LiteralValue::Str(_) => EntityKind::String,
            LiteralValue::Bool(_) => EntityKind::Bool,
        },
        Expr::Paren(p) => infer_kind(&p.inner),
        Expr::Unary(u) => match u.op {
            UnOp::Not => EntityKind::Bool,
            UnOp::Neg | UnOp::Plus => infer_kind(&u.operand),
        },
        Expr::Binary(b) => match b.op {
            BinOp::And | BinOp::Or => EntityKind::Bool,
            BinOp::Eq | BinOp::NotEq | BinOp::Lt | BinOp::Gt => infer_kind(&b.left),
            BinOp::Div => EntityKind::Float,
            BinOp::Add | BinOp::Sub | BinOp::Mul => {
                if infer_kind(&b.left) == EntityKind::Int && infer_kind(&b.right) == EntityKind::Int {
                    EntityKind::Int
                } else {
                    EntityKind::Float
                }
            }
        },
    }
}
