use bootstrap_confidence::{
    BootstrapDistribution, BootstrapSampler, IntervalMethod, PercentileInterval, SignificanceLevel,
};
use bootstrap_core::RandomSource;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

/// Generate uniform data in [0, scale)
fn generate_data(size: usize, scale: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen::<f64>() * scale).collect()
}

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bootstrap");
    let n_resamples = [100, 1000, 5000];
    // Roughly the size of a single tabular column
    let data = generate_data(1338, 60_000.0, 42);

    for &n in &n_resamples {
        let sampler = BootstrapSampler::new(n).unwrap();
        group.bench_with_input(BenchmarkId::new("mean", n), &data, |b, data| {
            let mut rng = RandomSource::seeded(7);
            b.iter(|| sampler.bootstrap(black_box(data), &mut rng))
        });
    }

    group.finish();
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("PercentileInterval");

    for &n in &[100usize, 1000, 10_000] {
        let dist = BootstrapDistribution::new(generate_data(n, 1.0, 3));
        group.bench_with_input(BenchmarkId::new("interval", n), &dist, |b, dist| {
            b.iter(|| PercentileInterval.interval(black_box(dist), SignificanceLevel::FIVE_PERCENT))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bootstrap, bench_percentile);
criterion_main!(benches);
