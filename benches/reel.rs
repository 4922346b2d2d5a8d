//! Benchmarks for reel updates.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use reel_engine::{
    engine::{Reel, ReelEnv, SymbolRng},
    schema::ReelConfig,
    services::{SilentBackend, SoundBank, TextureAtlas},
};

fn build_reel(symbol_count: usize) -> Reel {
    let config = ReelConfig::with_size(symbol_count, 100.0);
    let env = ReelEnv::new(
        Arc::new(TextureAtlas::from_names(config.symbols.iter().cloned())),
        Arc::new(SoundBank::<SilentBackend>::default()),
        SymbolRng::new(42),
    );
    Reel::new(config, env).expect("valid benchmark config")
}

fn bench_spinning_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("spinning_update");

    for symbol_count in [3, 5, 10, 50, 200] {
        let mut reel = build_reel(symbol_count);
        reel.start_spin();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_symbols", symbol_count)),
            &symbol_count,
            |b, _| {
                b.iter(|| {
                    reel.update(black_box(1.0));
                });
            },
        );
    }

    group.finish();
}

fn bench_full_stop(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_stop");

    for symbol_count in [5, 50] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_symbols", symbol_count)),
            &symbol_count,
            |b, &n| {
                let mut reel = build_reel(n);
                b.iter(|| {
                    reel.start_spin();
                    reel.stop_spin();
                    while reel.speed() > 0.0 {
                        reel.update(black_box(1.0));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_spinning_update, bench_full_stop);
criterion_main!(benches);
