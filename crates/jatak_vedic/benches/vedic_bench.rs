use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jatak_vedic::{
    ALL_GRAHAS, ayanamsha_deg, dignity_for, mangal_dosha, nakshatra_from_longitude,
    sidereal_from_tropical, sign_number, vimshottari_snapshot, whole_sign_house,
};

fn sidereal_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;
    let tropical_lon = 123.456;

    let mut group = c.benchmark_group("sidereal");
    group.bench_function("ayanamsha_deg", |b| b.iter(|| ayanamsha_deg(black_box(jd))));
    group.bench_function("sidereal_from_tropical", |b| {
        let aya = ayanamsha_deg(jd);
        b.iter(|| sidereal_from_tropical(black_box(tropical_lon), black_box(aya)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let lon = 211.75;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("sign_number", |b| b.iter(|| sign_number(black_box(lon))));
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("whole_sign_house", |b| {
        b.iter(|| whole_sign_house(black_box(5), black_box(11)))
    });
    group.finish();
}

fn dignity_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dignity");
    group.bench_function("dignity_all_grahas", |b| {
        b.iter(|| {
            for &graha in &ALL_GRAHAS {
                for sign in 1..=12u8 {
                    black_box(dignity_for(graha, sign));
                }
            }
        })
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_447_906.770_833_333;
    let moon_lon = 211.75;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("vimshottari_snapshot", |b| {
        b.iter(|| {
            vimshottari_snapshot(
                black_box(birth_jd),
                black_box(moon_lon),
                black_box(birth_jd + 12_000.0),
            )
        })
    });
    group.finish();
}

fn dosha_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dosha");
    group.bench_function("mangal_dosha", |b| b.iter(|| mangal_dosha(black_box(8))));
    group.finish();
}

criterion_group!(
    benches,
    sidereal_bench,
    zodiac_bench,
    dignity_bench,
    dasha_bench,
    dosha_bench
);
criterion_main!(benches);
