use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polylab::prelude::*;

fn bench_evaluate(c: &mut Criterion) {
    let cubic = poly![1.0, 0.0, -3.0, 2.0];
    let quintic = poly![-2.0, 0.0, 1.0, 0.0, 0.0, 3.0];

    c.bench_function("evaluate_cubic", |b| {
        b.iter(|| black_box(cubic.evaluate(black_box(1.37))))
    });
    c.bench_function("evaluate_quintic", |b| {
        b.iter(|| black_box(quintic.evaluate(black_box(1.37))))
    });
}

fn bench_probe_report(c: &mut Criterion) {
    let p = poly![1.0, 0.0, -3.0, 2.0];
    let window = Interval::new(-5.0, 5.0).unwrap();

    c.bench_function("critical_points_probe", |b| {
        b.iter(|| report(black_box(&p), black_box(&window)))
    });
}

fn bench_derivative_report(c: &mut Criterion) {
    let p = poly![1.0, 0.0, -2.0, 0.0, 0.0];
    let window = Interval::new(-5.0, 5.0).unwrap();

    c.bench_function("critical_points_derivative_scan", |b| {
        b.iter(|| report_from_derivative(black_box(&p), black_box(&window)))
    });
}

fn bench_range(c: &mut Criterion) {
    let p = poly![1.0, 0.0, -2.0, 0.0, 1.0];

    c.bench_function("range_even_degree", |b| {
        b.iter(|| polylab::range::analyze(black_box(&p)))
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_probe_report,
    bench_derivative_report,
    bench_range
);
criterion_main!(benches);
