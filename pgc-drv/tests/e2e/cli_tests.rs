//! CLI surface tests: help/version output, `-o`, `--emit`, `--verbose`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pgc_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_pgc"))
}

fn write_source(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture source");
    path
}

#[test]
fn help_output_mentions_usage() {
    let mut cmd = Command::new(pgc_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").or(predicate::str::contains("pgc")));
}

#[test]
fn version_output_succeeds() {
    let mut cmd = Command::new(pgc_bin());
    cmd.arg("--version");

    cmd.assert().success().stdout(predicate::str::contains("pgc"));
}

#[test]
fn compile_writes_cil_to_the_given_output_path() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "prog.pgc", "main i_x = 2 + 3; writeln(i_x); end");
    let output_path = temp_dir.path().join("prog.il");

    Command::new(pgc_bin())
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output_path).expect("read output");
    assert!(written.contains(".locals (int64 i_x)"));
}

#[test]
fn compile_without_output_path_prints_cil_to_stdout() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "prog.pgc", "main end");

    Command::new(pgc_bin())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(".assembly extern mscorlib"));
}

#[test]
fn verbose_mode_logs_each_phase_to_stderr() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "prog.pgc", "main end");

    Command::new(pgc_bin())
        .arg(&input)
        .arg("--verbose")
        .assert()
        .success();
}

#[test]
fn emit_tokens_dumps_the_token_stream_without_producing_cil() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "prog.pgc", "main i_x = 1; end");

    Command::new(pgc_bin())
        .arg(&input)
        .arg("--emit")
        .arg("tokens")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Identifier").and(predicate::str::contains(".assembly").not()),
        );
}

#[test]
fn emit_ast_dumps_the_parsed_tree() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "prog.pgc", "main i_x = 1; end");

    Command::new(pgc_bin())
        .arg(&input)
        .arg("--emit")
        .arg("ast")
        .assert()
        .success()
        .stdout(predicate::str::contains("AssignStmt"));
}

#[test]
fn missing_input_file_fails_with_an_io_error() {
    Command::new(pgc_bin())
        .arg("/nonexistent/path/to/file.pgc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
