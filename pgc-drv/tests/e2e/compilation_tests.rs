//! The §8 boundary scenarios, driven end to end through the `pgc` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pgc_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_pgc"))
}

fn write_source(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("prog.pgc");
    std::fs::write(&path, contents).expect("write fixture source");
    path
}

#[test]
fn minimal_empty_program_compiles_with_no_locals_or_arithmetic() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "main end");
    let output_path = temp_dir.path().join("prog.il");

    Command::new(pgc_bin())
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let code = std::fs::read_to_string(&output_path).expect("read output");
    assert!(!code.contains(".locals"));
    assert!(!code.contains("add"));
}

#[test]
fn declaration_and_write_compiles_to_the_expected_cil() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(
        &temp_dir,
        "main i_x = 2 + 3; writeln(i_x); end",
    );
    let output_path = temp_dir.path().join("prog.il");

    Command::new(pgc_bin())
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let code = std::fs::read_to_string(&output_path).expect("read output");
    assert!(code.contains(".locals (int64 i_x)"));
    assert!(code.contains("call void [mscorlib]System.Console::Write(int64)"));
    assert!(code.contains("call void [mscorlib]System.Console::WriteLine()"));
}

#[test]
fn undeclared_use_fails_with_the_sem_message() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "main i_x = i_y; end");

    Command::new(pgc_bin())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Erro na linha 1 – i_y não declarado"));
}

#[test]
fn redeclaration_fails_with_the_sem_message() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "main i_x; i_x; end");

    Command::new(pgc_bin())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Erro na linha 1 – i_x já declarado"));
}

#[test]
fn malformed_identifier_fails_with_the_lexer_message() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "main iBad; end");

    Command::new(pgc_bin())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("identificador inválido"));
}

#[test]
fn unterminated_string_fails_with_the_lexer_message() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, r#"main writeln("hi); end"#);

    Command::new(pgc_bin())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("constante_string inválida"));
}

#[test]
fn float_literal_strips_its_trailing_zero() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "main f_x = 1,250; writeln(f_x); end");
    let output_path = temp_dir.path().join("prog.il");

    Command::new(pgc_bin())
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let code = std::fs::read_to_string(&output_path).expect("read output");
    assert!(code.contains("ldc.r8 1.25"));
    assert!(!code.contains("conv.i8"));
}

#[test]
fn nested_if_elif_else_compiles_successfully() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(
        &temp_dir,
        "main if (true) i_x; elif (false) i_x; else i_x; end end",
    );

    Command::new(pgc_bin()).arg(&input).assert().success();
}

#[test]
fn compiling_the_same_source_twice_yields_byte_identical_code() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = write_source(&temp_dir, "main i_x = 2 + 3; writeln(i_x); end");

    let first = Command::new(pgc_bin()).arg(&input).output().expect("run");
    let second = Command::new(pgc_bin()).arg(&input).output().expect("run");
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_input_file_fails_without_crashing() {
    Command::new(pgc_bin())
        .arg("/nonexistent/path/to/file.pgc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
