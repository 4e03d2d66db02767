//! Parser benchmarks.
//!
//! Run with: `cargo bench --package pgc-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pgc_lex::Lexer;
use pgc_par::Parser;

fn parse_source(source: &str) {
    let tokens = Lexer::new(source).tokenize().expect("lex");
    Parser::parse(tokens).expect("parse");
}

fn bench_parser_declarations(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_declarations");

    let source = "main i_x = 2 + 3; f_y = 1,5 * i_x; writeln(i_x); end";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_program", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

fn bench_parser_control_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_control_flow");

    let source = r#"main
        b_flag = true;
        if (b_flag == true)
            writeln("sim");
        elif (b_flag == false)
            writeln("não");
        else
            writeln("talvez");
        end
        repeat
            i_x = i_x + 1;
        while (i_x < 10);
    end"#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("if_elif_else_repeat", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

fn bench_parser_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_expressions");

    let source = "main i_x = 1 + 2 * 3 - 4 / 2 == 5 && true || false; end";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_precedence", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_declarations,
    bench_parser_control_flow,
    bench_parser_expressions
);
criterion_main!(benches);
