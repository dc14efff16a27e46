use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use delta_ot_core::{from_json, Delta};
use delta_ot_testkit::fixtures::bold;

/// Appending inserts that merge into the previous op.
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("merge_long", size), size, |b, &size| {
            b.iter(|| {
                let mut delta = Delta::new();
                for _ in 0..size {
                    delta = delta.insert("abcdefghijkl", None);
                }
                black_box(delta)
            });
        });

        group.bench_with_input(BenchmarkId::new("merge_char", size), size, |b, &size| {
            b.iter(|| {
                let mut delta = Delta::new();
                for _ in 0..size {
                    delta = delta.insert("a", None);
                }
                black_box(delta)
            });
        });

        group.bench_with_input(BenchmarkId::new("mixed", size), size, |b, &size| {
            b.iter(|| {
                let mut delta = Delta::new();
                for _ in 0..size {
                    delta = delta
                        .insert("a", None)
                        .retain(1, None)
                        .insert("b", None)
                        .retain(4, None)
                        .delete(1);
                }
                black_box(delta)
            });
        });
    }

    group.finish();
}

/// A document of `runs` alternating plain and bold runs.
fn formatted_document(runs: usize) -> Delta {
    (0..runs).fold(Delta::new(), |delta, i| {
        let attrs = (i % 2 == 1).then(bold);
        delta.insert("lorem ipsum ", attrs)
    })
}

/// An edit touching every run of [`formatted_document`].
fn scattered_edit(runs: usize) -> Delta {
    (0..runs).fold(Delta::new(), |delta, _| {
        delta.retain(4, None).insert("x", None).delete(2).retain(6, Some(bold()))
    })
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for runs in [10, 100, 1000].iter() {
        let document = formatted_document(*runs);
        let edit = scattered_edit(*runs);
        group.bench_with_input(BenchmarkId::from_parameter(runs), runs, |b, _| {
            b.iter(|| black_box(document.compose(&edit)));
        });
    }

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for runs in [10, 100, 1000].iter() {
        let a = scattered_edit(*runs);
        let b = Delta::new().retain(3, None).insert("yy", None).concat(&scattered_edit(*runs));
        group.bench_with_input(BenchmarkId::from_parameter(runs), runs, |bench, _| {
            bench.iter(|| black_box(a.transform(&b, true)));
        });
    }

    group.finish();
}

fn bench_from_json(c: &mut Criterion) {
    let input = br#"{"ops":[{"retain":35},{"retain":11,"attributes":{"bold":true}}]}"#;
    c.bench_function("from_json", |b| {
        b.iter(|| black_box(from_json(black_box(input))));
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_compose,
    bench_transform,
    bench_from_json
);
criterion_main!(benches);
