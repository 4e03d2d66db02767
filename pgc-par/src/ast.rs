//! AST node definitions (§3).
//!
//! Every node borrows its tokens straight from the source buffer through
//! `Token<'a>`, and a parent owns its children directly (`Box<Expr<'a>>`,
//! `Vec<Stmt<'a>>`, ...) rather than through an index handle into a shared
//! arena — ownership is already tree-shaped, so Rust's own `Box`/`Vec` give
//! that for free without the in-place placeholder tricks the reference
//! implementation needed to work around raw-pointer aliasing.

use pgc_lex::Token;
use pgc_util::EntityKind;

/// The root of a parsed program: `main <stmt_list> end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Main<'a> {
    pub body: StmtList<'a>,
}

/// A statement list, in source order. §4.2 notes these are shrunk to exact
/// length at ε-production time; `Vec` already tracks exact length, so the
/// Rust analogue is simply building it with `push` and never over-reserving.
pub type StmtList<'a> = Vec<Stmt<'a>>;

/// A non-empty list of identifiers (I1).
pub type IdentList<'a> = Vec<Ident<'a>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt<'a> {
    VarDecl(VarDecl<'a>),
    Assign(AssignStmt<'a>),
    Read(ReadStmt<'a>),
    Write(WriteStmt<'a>),
    If(IfStmt<'a>),
    Repeat(RepeatStmt<'a>),
}

/// Declaration-only form: `i_x, i_y;` with no `= expr` tail.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl<'a> {
    pub idents: IdentList<'a>,
}

/// Multi-target assignment: `i_x, i_y = expr;` assigns the same value to
/// every target in `idents`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt<'a> {
    pub idents: IdentList<'a>,
    pub expr: Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadStmt<'a> {
    pub inputs: Vec<InputArg<'a>>,
}

/// One `read(...)` argument: an optional prompt string followed by the
/// identifier that receives the parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct InputArg<'a> {
    pub prompt: Option<Literal<'a>>,
    pub ident: Ident<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKeyword {
    Write,
    Writeln,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt<'a> {
    pub keyword: WriteKeyword,
    pub exprs: Vec<Expr<'a>>,
}

/// `if`/`elif`/`else` share one node shape; `elif`/`else` branches are
/// linked through `else_stmt` rather than duplicated as a separate AST
/// variant (I3: the chain is acyclic and its last link has `else_stmt =
/// None`). `else` branches carry no condition. Only the root of the chain
/// is `is_root`, matching the single shared end-label the code generator
/// threads through every branch (§4.4).
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt<'a> {
    pub cond: Option<Expr<'a>>,
    pub body: StmtList<'a>,
    pub else_stmt: Option<Box<IfStmt<'a>>>,
    pub is_root: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKeyword {
    While,
    Until,
}

/// A post-condition loop: `repeat <body> while|until (<expr>);`.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt<'a> {
    pub body: StmtList<'a>,
    pub keyword: RepeatKeyword,
    pub expr: Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary(BinaryExpr<'a>),
    Unary(UnaryExpr<'a>),
    Paren(ParenExpr<'a>),
    Ident(Ident<'a>),
    Literal(Literal<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    Gt,
    And,
    Or,
}

/// (I2 is satisfied structurally: a `BinaryExpr` is only ever constructed
/// once a tail operator and its right operand have both been parsed — see
/// `Parser::parse_binary_level` — so there is no partially-built state to
/// "reduce" the way the reference implementation's placeholder node needed.)
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<'a> {
    pub op: BinOp,
    pub left: Box<Expr<'a>>,
    pub right: Box<Expr<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Not,
    Neg,
    Plus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr<'a> {
    pub op: UnOp,
    pub operand: Box<Expr<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr<'a> {
    pub inner: Box<Expr<'a>>,
}

/// An identifier reference. `entity_kind` is a pure function of the
/// lexeme's prefix (I4), computed once here rather than recomputed by every
/// later phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ident<'a> {
    pub tok: Token<'a>,
    pub entity_kind: EntityKind,
}

impl<'a> Ident<'a> {
    pub fn new(tok: Token<'a>) -> Self {
        Self {
            tok,
            entity_kind: EntityKind::from_ident_prefix(tok.slice),
        }
    }

    pub fn name(&self) -> &'a str {
        self.tok.slice
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Int(i64),
    Float(f64),
    Str(&'a str),
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal<'a> {
    pub tok: Token<'a>,
    pub value: LiteralValue<'a>,
}
