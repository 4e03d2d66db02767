//! pgc-drv — the compiler driver (§2, §6).
//!
//! Ties the four phases together in the fixed forward order the pipeline
//! requires — lex, parse, check, generate — short-circuiting at the first
//! phase that fails and rendering its error through the shared §7 template.
//! `compile` is the crate's one entry point; the CLI binary is a thin
//! wrapper around it.

mod error;

use std::time::Instant;

use pgc_alloc::Arena;
use pgc_gen::generate;
use pgc_lex::Lexer;
use pgc_par::ast::Main;
use pgc_par::Parser;
use pgc_sem::Checker;

pub use pgc_par::ast;

const SUCCESS_MESSAGE: &str = "programa compilado com sucesso";

/// What a `compile` call hands back: always a message, and the emitted CIL
/// only when every phase succeeded. Both strings are allocated out of the
/// caller-supplied arena — the only allocation that survives the call.
pub struct CompileOutput<'a> {
    pub message: &'a str,
    pub code: Option<&'a str>,
}

impl CompileOutput<'_> {
    pub fn is_success(&self) -> bool {
        self.code.is_some()
    }
}

/// Which intermediate representation a caller wants dumped instead of the
/// final CIL — used by the `--emit` CLI flag, not part of the compile
/// contract itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Tokens,
    Ast,
    Cil,
}

/// Runs the full pipeline over one UTF-8 source buffer.
///
/// The tokenizer and parser build their token vector and AST as ordinary
/// owned Rust values (`Vec`, `Box`) rather than against `arena` directly —
/// the borrow checker already enforces the tree-shaped, single-owner
/// lifetime the reference arena existed to guarantee. `arena` instead backs
/// the one allocation that does need a caller-controlled lifetime: the
/// returned message and code strings, matching the `compile(allocator,
/// source_view)` contract.
pub fn compile<'a>(arena: &'a Arena, source: &str) -> CompileOutput<'a> {
    let start = Instant::now();
    match run_pipeline(source) {
        Ok(cil) => {
            let message = if cfg!(debug_assertions) {
                format!("{SUCCESS_MESSAGE} ({} µs)", start.elapsed().as_micros())
            } else {
                SUCCESS_MESSAGE.to_string()
            };
            log::info!("compilation succeeded: {} byte(s) of CIL", cil.len());
            CompileOutput {
                message: arena.alloc_str(&message),
                code: Some(arena.alloc_str(&cil)),
            }
        }
        Err(rendered) => {
            log::warn!("compilation failed: {rendered}");
            CompileOutput {
                message: arena.alloc_str(&rendered),
                code: None,
            }
        }
    }
}

/// Parses `source` only as far as the requested `Emit` stage, for the CLI's
/// `--emit` flag. Returns the rendered dump on success, or the rendered
/// phase error on failure — this is diagnostic tooling, not part of the
/// compile contract, so it returns an owned `String` rather than threading
/// an arena through.
pub fn compile_emit(source: &str, emit: Emit) -> Result<String, String> {
    let tokens = Lexer::new(source)
        .tokenize()
        .map_err(error::render_lex_error)?;
    if emit == Emit::Tokens {
        return Ok(format!("{tokens:#?}"));
    }

    let main = Parser::parse(tokens).map_err(error::render_parse_error)?;
    if emit == Emit::Ast {
        return Ok(format!("{main:#?}"));
    }

    Checker::new()
        .check(&main)
        .map_err(error::render_sem_error)?;
    Ok(generate(&main))
}

fn run_pipeline(source: &str) -> Result<String, String> {
    let tokens = Lexer::new(source)
        .tokenize()
        .map_err(error::render_lex_error)?;
    let main: Main<'_> = Parser::parse(tokens).map_err(error::render_parse_error)?;
    Checker::new()
        .check(&main)
        .map_err(error::render_sem_error)?;
    Ok(generate(&main))
}
