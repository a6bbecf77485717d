use criterion::{black_box, criterion_group, criterion_main, Criterion};
use happylibs::sample::{sample, sample_with_rng};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("word{i}")).collect()
}

fn bench_partial_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    // Cost should be dominated by the copy, not by k.
    let sizes = [100, 10_000, 100_000];
    let k = 3;

    for &size in &sizes {
        let items = words(size);
        group.bench_function(format!("partial_n{}_k{}", size, k), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| {
                black_box(sample_with_rng(black_box(&items), k, &mut rng));
            })
        });
    }

    for &size in &sizes {
        let items = words(size);
        group.bench_function(format!("full_n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| {
                black_box(sample_with_rng(black_box(&items), size, &mut rng));
            })
        });
    }
    group.finish();
}

fn bench_thread_rng(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_thread_rng");
    let items = words(1_000);

    for k in [1, 3, 10] {
        group.bench_function(format!("n1000_k{}", k), |b| {
            b.iter(|| {
                black_box(sample(black_box(&items), black_box(k)));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_partial_shuffle, bench_thread_rng);
criterion_main!(benches);
