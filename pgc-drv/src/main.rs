//! pgc — the compiler's command-line front end.
//!
//! Reads one source file, runs it through [`pgc_drv::compile`], and writes
//! either the emitted CIL or the rendered error to stdout/stderr. `--emit`
//! stops the pipeline early and dumps an intermediate representation
//! instead, for inspecting the lexer or parser in isolation.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser as ClapParser, ValueEnum};
use pgc_alloc::Arena;
use pgc_drv::{compile, compile_emit, Emit};

#[derive(ClapParser, Debug)]
#[command(
    name = "pgc",
    version,
    about = "A compiler for the Portuguese-keyword pgc language"
)]
struct Cli {
    /// Source file to compile
    input: PathBuf,

    /// Write the emitted CIL to this path instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop after a phase and dump its output instead of the final CIL
    #[arg(long, value_enum)]
    emit: Option<EmitArg>,

    /// Log each phase as it runs
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum EmitArg {
    Tokens,
    Ast,
    Cil,
}

impl From<EmitArg> for Emit {
    fn from(arg: EmitArg) -> Self {
        match arg {
            EmitArg::Tokens => Emit::Tokens,
            EmitArg::Ast => Emit::Ast,
            EmitArg::Cil => Emit::Cil,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::init();
    }

    let source = match fs::read_to_string(&cli.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: could not read {}: {e}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    if let Some(emit) = cli.emit {
        return match compile_emit(&source, emit.into()) {
            Ok(dump) => {
                println!("{dump}");
                ExitCode::SUCCESS
            }
            Err(message) => {
                eprintln!("error: {message}");
                ExitCode::FAILURE
            }
        };
    }

    let arena = Arena::new();
    let output = compile(&arena, &source);

    if let Some(code) = output.code {
        match &cli.output {
            Some(path) => {
                if let Err(e) = fs::write(path, code) {
                    eprintln!("error: could not write {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            }
            None => println!("{code}"),
        }
        eprintln!("{}", output.message);
        ExitCode::SUCCESS
    } else {
        eprintln!("error: {}", output.message);
        ExitCode::FAILURE
    }
}
