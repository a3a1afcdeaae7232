use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use setcover::{greedy_cover, SetCoverInstance};

/// Builds a random solvable instance: each subset draws `subset_size` random
/// elements, then every element is planted into one subset so a cover exists.
fn random_instance(
    universe_size: usize,
    subset_count: usize,
    subset_size: usize,
    seed: u64,
) -> SetCoverInstance {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut subsets: Vec<HashSet<usize>> = (0..subset_count)
        .map(|_| {
            (0..subset_size)
                .map(|_| rng.gen_range(0..universe_size))
                .collect()
        })
        .collect();
    for element in 0..universe_size {
        let idx = rng.gen_range(0..subset_count);
        subsets[idx].insert(element);
    }
    SetCoverInstance::new(universe_size, subsets).unwrap()
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_cover");
    for &(universe_size, subset_count) in &[(100, 50), (1_000, 200), (5_000, 500)] {
        let instance = random_instance(universe_size, subset_count, universe_size / 20, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", universe_size, subset_count)),
            &instance,
            |b, instance| b.iter(|| greedy_cover(black_box(instance)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_greedy);
criterion_main!(benches);
