//! Benchmark for the buoyancy integration step.

use bevy_buoyant_cube::components::BuoyantCube;
use bevy_buoyant_cube::resources::{FluidEnvironment, SimConfig};
use bevy_buoyant_cube::systems::stepper::integrate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_integration_step(c: &mut Criterion) {
    let env = FluidEnvironment::default();
    let config = SimConfig::default();

    let mut group = c.benchmark_group("Buoyancy Integration");

    for cube_count in [100, 1000, 10000].iter() {
        let cubes: Vec<BuoyantCube> = (0..*cube_count)
            .map(|i| {
                // Spread cubes across air, surface, and submerged regimes
                BuoyantCube::new(env.water_y - 2.0 + (i % 5) as f32)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(cube_count),
            cube_count,
            |b, &_count| {
                b.iter(|| {
                    let dt = 1.0 / 60.0;
                    let mut scratch = cubes.clone();
                    for (i, cube) in scratch.iter_mut().enumerate() {
                        integrate(cube, &env, &config, i as f32 * dt, dt);
                    }
                    scratch
                });
            },
        );
    }

    group.finish();
}

fn benchmark_force_evaluation(c: &mut Criterion) {
    let env = FluidEnvironment::default();

    c.bench_function("gravity + buoyancy forces", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..1000 {
                let y = env.water_y - 2.0 + (i % 5) as f32;
                acc += env.gravity_force(1.0, y + 0.5) + env.buoyant_force(1.0, y);
            }
            acc
        });
    });
}

criterion_group!(
    benches,
    benchmark_integration_step,
    benchmark_force_evaluation
);
criterion_main!(benches);
