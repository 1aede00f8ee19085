//! Loader and validator performance benchmarks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use colander::{ColumnRule, Loader, RuleKind, Validator};

/// Build a synthetic semicolon-delimited file with the given number of rows.
fn synthetic_csv(rows: usize) -> String {
    let mut text = String::from("id;name;amount;when\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{};person_{};{},5;2024-0{}-15\n",
            i,
            i % 100,
            i % 1000,
            (i % 9) + 1
        ));
    }
    text
}

fn bench_loader(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader");
    for rows in [100, 1_000, 10_000] {
        let text = synthetic_csv(rows);
        group.bench_with_input(BenchmarkId::new("parse_str", rows), &text, |b, text| {
            let loader = Loader::new();
            b.iter(|| loader.parse_str(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_validator(c: &mut Criterion) {
    let mut group = c.benchmark_group("validator");
    let rules = vec![
        ColumnRule::new("id", RuleKind::Numeric).required(),
        ColumnRule::new("amount", RuleKind::Numeric)
            .with_min("0")
            .with_max("500"),
        ColumnRule::new("when", RuleKind::Date).with_min("2024-01-01"),
    ];

    for rows in [100, 1_000, 10_000] {
        let table = Loader::new().parse_str(&synthetic_csv(rows)).unwrap();
        group.bench_with_input(BenchmarkId::new("analyze", rows), &table, |b, table| {
            let validator = Validator::new();
            b.iter(|| validator.analyze(black_box(table), black_box(&rules)));
        });
    }
    group.finish();
}

fn bench_autofix(c: &mut Criterion) {
    let table = Loader::new().parse_str(&synthetic_csv(1_000)).unwrap();
    c.bench_function("apply_auto_fixes_1000", |b| {
        let validator = Validator::new();
        b.iter_batched(
            || table.clone(),
            |mut t| validator.apply_auto_fixes(&mut t),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_loader, bench_validator, bench_autofix);
criterion_main!(benches);
