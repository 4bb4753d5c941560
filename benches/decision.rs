use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mwt::{
    DecisionSeed, DrawDomain, EpsilonGreedy, EpsilonGreedyConfig, Mwt, MwtConfig, Softmax,
    SoftmaxConfig,
};
use std::hint::black_box;

fn noop(_: &mwt::DecisionRecord<'_, [f32]>) -> Result<(), mwt::RecordError> {
    Ok(())
}

fn bench_draw(c: &mut Criterion) {
    c.bench_function("seed_draw", |b| {
        b.iter(|| {
            let seed = DecisionSeed::new(black_box("evt-0123456789"), black_box("app"));
            black_box(seed.draw(DrawDomain::Explore));
        })
    });
}

fn bench_decisions(c: &mut Criterion) {
    let mwt = Mwt::new(MwtConfig::new("app"), noop);

    let mut group = c.benchmark_group("choose_action");
    for &n_actions in &[2u32, 16u32, 256u32] {
        // A deterministic, slightly-non-uniform score pattern.
        let ctx: Vec<f32> = (0..n_actions).map(|i| ((i * 17 + 3) % 101) as f32 / 10.0).collect();

        let eg = EpsilonGreedy::new(
            EpsilonGreedyConfig {
                epsilon: 0.1,
                num_actions: n_actions,
            },
            |c: &[f32]| (c.len() / 2) as u32,
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("epsilon_greedy", n_actions), &ctx, |b, ctx| {
            b.iter(|| black_box(mwt.choose_action(&eg, &ctx[..], black_box("evt-1")).unwrap()))
        });

        let sm = Softmax::new(
            SoftmaxConfig {
                lambda: 0.5,
                num_actions: n_actions,
            },
            |c: &[f32]| c.to_vec(),
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("softmax", n_actions), &ctx, |b, ctx| {
            b.iter(|| black_box(mwt.choose_action(&sm, &ctx[..], black_box("evt-1")).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_draw, bench_decisions);
criterion_main!(benches);
