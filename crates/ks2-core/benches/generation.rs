use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ks2_core::model::{ChildProfile, LearningStyle, Pace};
use ks2_core::scheme::{generate, ScheduleConfig};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let start = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();

    group.bench_function("nine_months_standard", |b| {
        let profile = ChildProfile::new("Bench", "Year 4");
        let schedule = ScheduleConfig::starting(start);
        b.iter(|| generate(black_box(&profile), black_box(&schedule)))
    });

    group.bench_function("nine_months_accelerated", |b| {
        let profile = ChildProfile::new("Bench", "Year 6")
            .with_style(LearningStyle::Visual)
            .with_pace(Pace::Accelerated);
        let schedule = ScheduleConfig::starting(start);
        b.iter(|| generate(black_box(&profile), black_box(&schedule)))
    });

    group.bench_function("two_years_six_terms", |b| {
        let profile = ChildProfile::new("Bench", "Year 3");
        let mut schedule = ScheduleConfig::starting(start);
        schedule.end_date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        schedule.terms = 6;
        b.iter(|| generate(black_box(&profile), black_box(&schedule)))
    });

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
