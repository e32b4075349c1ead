use criterion::{Criterion, criterion_group, criterion_main};
use memora_core::*;
use std::hint::black_box;

fn generate_tiers(c: &mut Criterion) {
    let catalog = SymbolCatalog::default();
    let mut group = c.benchmark_group("generate");

    for difficulty in Difficulty::ALL {
        group.bench_function(difficulty.name(), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                ShuffledBoardGenerator::seeded(black_box(seed))
                    .generate(difficulty.pair_count(), &catalog)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, generate_tiers);
criterion_main!(benches);
