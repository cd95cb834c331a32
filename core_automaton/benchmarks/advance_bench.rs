use core_automaton::{
    build_headless_app, run_turn, Automaton, LifeState, RulePreset, SimRng, SimulationConfig,
    TerrainState,
};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn forested(size: usize) -> Automaton {
    let mut automaton = Automaton::new(size, size).expect("valid dimensions");
    RulePreset::Wildfire.apply(&mut automaton);
    automaton.fill_terrain(TerrainState::Forest);
    for row in (0..size).step_by(4) {
        for column in (0..size).step_by(4) {
            automaton.set_life(row, column, LifeState::Alive);
        }
    }
    automaton.set_terrain(size / 2, size / 2, TerrainState::OnFire);
    automaton
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for size in [32usize, 64, 128, 256] {
        group.bench_with_input(BenchmarkId::new("grid", size), &size, |b, &size| {
            b.iter_batched(
                || (forested(size), SimRng::seed_from_u64(42)),
                |(mut automaton, mut rng)| {
                    automaton.advance(&mut rng);
                    automaton
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("turn");

    for size in [32usize, 128] {
        group.bench_with_input(BenchmarkId::new("grid", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let config = SimulationConfig {
                        rows: size,
                        columns: size,
                        seed: 42,
                        ..SimulationConfig::default()
                    };
                    build_headless_app(&config).expect("valid dimensions")
                },
                |mut app| {
                    run_turn(&mut app);
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(advance_benches, bench_advance, bench_turn);
criterion_main!(advance_benches);
