//! Parser benchmarks.
//!
//! Run with: `cargo bench --package tarn-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tarn_lex::Lexer;
use tarn_par::Parser;

fn parse_statement_count(source: &str) -> usize {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    program.stmts.len()
}

fn bench_parser_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    group.bench_function("precedence_ladder", |b| {
        b.iter(|| parse_statement_count(black_box("a + b * c + d / e - f == g < h")))
    });

    group.bench_function("nested_calls", |b| {
        b.iter(|| parse_statement_count(black_box("add(a, add(b, add(c, add(d, e * f))))")))
    });

    group.bench_function("function_literal", |b| {
        b.iter(|| {
            parse_statement_count(black_box(
                "let make = fn(x) { fn(y) { if (x < y) { x } else { y } } };",
            ))
        })
    });

    group.finish();
}

fn bench_parser_large_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_large");

    let source = "let a = 1 + 2 * 3; let f = fn(x) { x + a }; f(a) == 7;\n".repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_statements", |b| {
        b.iter(|| parse_statement_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(benches, bench_parser_expressions, bench_parser_large_program);
criterion_main!(benches);
