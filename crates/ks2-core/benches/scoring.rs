use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ks2_core::content::questions;
use ks2_core::diagnostic::analyze;
use ks2_core::model::{AnswerSet, CorrectAnswer};

fn all_correct() -> AnswerSet {
    questions::questions()
        .iter()
        .filter_map(|q| match q.correct_answer {
            CorrectAnswer::Exact(a) => Some((q.id, a)),
            CorrectAnswer::OneOf(list) => list.first().map(|a| (q.id, *a)),
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    group.bench_function("empty", |b| {
        let answers = AnswerSet::new();
        b.iter(|| analyze(black_box(&answers), black_box("Bench")))
    });

    group.bench_function("perfect", |b| {
        let answers = all_correct();
        b.iter(|| analyze(black_box(&answers), black_box("Bench")))
    });

    group.bench_function("all_wrong", |b| {
        let answers: AnswerSet = questions::questions()
            .iter()
            .map(|q| (q.id, "nope"))
            .collect();
        b.iter(|| analyze(black_box(&answers), black_box("Bench")))
    });

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
