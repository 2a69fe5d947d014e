use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kokoro::ephemeris::{julian_day, Ephemeris, SimplifiedEphemeris};
use kokoro::{calculate_natal_chart, ChartParams, ChartSettings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_calc_positions(c: &mut Criterion) {
    let ephemeris = SimplifiedEphemeris::default();
    let birth = NaiveDate::from_ymd_opt(1990, 7, 4)
        .unwrap()
        .and_hms_opt(6, 30, 0)
        .unwrap();
    let jd = julian_day(&birth);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    c.bench_function("calc_positions", |b| {
        b.iter(|| ephemeris.positions(black_box(jd), &mut rng))
    });
}

fn bench_natal_chart(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1990, 7, 4)
        .unwrap()
        .and_hms_opt(6, 30, 0)
        .unwrap();
    let params = ChartParams::new(35.6762, 139.6503, 9.0).unwrap();
    let settings = ChartSettings::default();

    c.bench_function("natal_chart", |b| {
        b.iter(|| calculate_natal_chart(black_box(&birth), black_box(&params), &settings))
    });
}

criterion_group!(benches, bench_calc_positions, bench_natal_chart);
criterion_main!(benches);
