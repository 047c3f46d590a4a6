use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sphera::kepler::{solve_eccentric_anomaly, true_anomaly};

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn random_cases(rng: &mut StdRng, samples: usize, e_range: (f64, f64)) -> Vec<(f64, f64)> {
    (0..samples)
        .map(|_| (rng.random_range(e_range.0..e_range.1), rand_angle(rng)))
        .collect()
}

/// Planetary regime: e ∈ [0.0, 0.25]
fn bench_planetary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/planetary_e<=0.25", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, (0.0, 0.25)),
            |cases| {
                for (e, m) in cases {
                    let ea = solve_eccentric_anomaly(black_box(e), black_box(m)).unwrap();
                    black_box(ea);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity (still elliptic): e ∈ [0.7, 0.95]
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/high_e_0.7..0.95", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, (0.7, 0.95)),
            |cases| {
                for (e, m) in cases {
                    black_box(solve_eccentric_anomaly(black_box(e), black_box(m)).ok());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Eccentric then true anomaly, as in one pass of the planetary reduction.
fn bench_true_anomaly(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/with_true_anomaly", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, (0.0, 0.25)),
            |cases| {
                for (e, m) in cases {
                    let nu = solve_eccentric_anomaly(e, black_box(m))
                        .and_then(|ea| true_anomaly(e, ea))
                        .unwrap();
                    black_box(nu);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Mercury at 1984-01-21, the slowest planetary case of the reference epoch.
fn bench_fixed_case(c: &mut Criterion) {
    let e = 0.20563138612828713;
    let m = 1.7277480419370512;

    c.bench_function("solve_kepler_equation/mercury_1984", |b| {
        b.iter(|| {
            let ea = solve_eccentric_anomaly(black_box(e), black_box(m));
            black_box(ea.ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_true_anomaly, bench_fixed_case
);
criterion_main!(benches);
