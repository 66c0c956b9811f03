use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use horo_base::{
    Chart, HoroscopeGenerator, Painter, PredictionBank, Sign, compatibility, render,
    sign_for_date, sign_from_degrees,
};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn zodiac_bench(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1990, 7, 4).unwrap();

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("sign_for_date", |b| {
        b.iter(|| sign_for_date(black_box(birth)))
    });
    group.bench_function("sign_from_degrees", |b| {
        b.iter(|| sign_from_degrees(black_box(123.456)))
    });
    group.finish();
}

fn generation_bench(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1990, 7, 4).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let generator = HoroscopeGenerator::default();
    let mut rng = ChaChaRng::seed_from_u64(42);

    let mut group = c.benchmark_group("generation");
    group.bench_function("prediction_bank", |b| b.iter(PredictionBank::new));
    group.bench_function("chart", |b| {
        b.iter(|| Chart::generate(black_box(birth), &mut rng))
    });
    group.bench_function("compatibility", |b| {
        b.iter(|| compatibility(Sign::Cancer, black_box(Sign::Pisces), &mut rng))
    });
    group.bench_function("report_and_render", |b| {
        b.iter(|| {
            let report = generator.generate(black_box(birth), today, &mut rng);
            render(&report, Painter::plain())
        })
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, generation_bench);
criterion_main!(benches);
