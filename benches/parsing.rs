use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dice_expr::DiceExpression;
use rand::{rngs::StdRng, SeedableRng};

pub fn benchmark_parsing(c: &mut Criterion) {
    c.bench_function("parse single dice", |b| {
        b.iter(|| DiceExpression::new(black_box("999d444")))
    });
    c.bench_function("parse long chain", |b| {
        b.iter(|| DiceExpression::new(black_box("10d6 + 3d4 - d% + 100 - 2d20 + 7 - d8")))
    });
}

pub fn benchmark_rolling(c: &mut Criterion) {
    let expr = DiceExpression::new("999d444 - 20d%").unwrap();
    c.bench_function("roll cursed dice", |b| {
        b.iter(|| {
            let rng = StdRng::seed_from_u64(1);
            expr.roll_with(rng)
        });
    });
    c.bench_function("max cursed dice", |b| b.iter(|| black_box(&expr).max()));
}

criterion_group!(benches, benchmark_parsing, benchmark_rolling);
criterion_main!(benches);
