use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rl::{Env, EnvConfig, HoverController, LunarEnv, Policy, VecEnv};

fn bench_single_step(c: &mut Criterion) {
    let config = EnvConfig::default();
    let mut policy = HoverController::new(config.gravity, config.thrust_force);
    let mut env = LunarEnv::new(config).unwrap();
    let mut obs = env.reset();

    c.bench_function("lunar_step", |b| {
        b.iter(|| {
            let action = policy.select_action(&obs);
            let step = env.step(black_box(action.as_slice())).unwrap();
            obs = if step.done { env.reset() } else { step.observation };
        });
    });
}

fn bench_vec_env(c: &mut Criterion) {
    let mut venv = VecEnv::new(&EnvConfig::default(), 64).unwrap();
    venv.reset_all();
    let actions = vec![vec![0.5, 0.5, 0.25, 0.25]; venv.len()];

    c.bench_function("vec_env_step_64", |b| {
        b.iter(|| black_box(venv.step(&actions).unwrap()));
    });
}

criterion_group!(benches, bench_single_step, bench_vec_env);
criterion_main!(benches);
