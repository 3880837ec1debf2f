//! # Registry Performance Benchmark
//!
//! ARCHITECT'S REQUIREMENTS:
//! - Spawn throughput must stay allocation-amortized (doubling growth only)
//! - Mask-filtered iteration must be a single compare per slot
//!
//! Run with: `cargo bench --package lattice_ecs`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lattice_ecs::{Component, Registry, TypeRegistry};

#[derive(Default)]
struct Position {
    x: f32,
    y: f32,
    z: f32,
}
impl Component for Position {}

#[derive(Default)]
struct Velocity {
    x: f32,
    y: f32,
    z: f32,
}
impl Component for Velocity {}

/// Largest world a 32-bit handle can address.
const ENTITY_COUNT: usize = 65_000;

fn populated_registry(count: usize, velocity_stride: usize) -> Registry<u32> {
    let mut registry: Registry<u32> = Registry::with_types(TypeRegistry::new());
    for i in 0..count {
        let entity = registry.spawn();
        registry.assign(
            entity,
            Position {
                x: i as f32,
                y: 0.0,
                z: 0.0,
            },
        );
        if velocity_stride != 0 && i % velocity_stride == 0 {
            registry.assign(entity, Velocity { x: 1.0, y: 2.0, z: 3.0 });
        }
    }
    registry
}

/// Benchmark: spawn entities up to the handle ceiling.
fn bench_spawn_entities(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn_entities");

    for count in [1_000, 10_000, ENTITY_COUNT] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut registry: Registry<u32> = Registry::with_types(TypeRegistry::new());
                for _ in 0..count {
                    black_box(registry.spawn());
                }
                registry.alive_count()
            });
        });
    }

    group.finish();
}

/// Benchmark: assign one component per entity.
fn bench_assign_components(c: &mut Criterion) {
    c.bench_function("assign_position_65k", |b| {
        b.iter(|| {
            let registry = populated_registry(ENTITY_COUNT, 0);
            registry.alive_count()
        });
    });
}

/// THE CRITICAL BENCHMARK: iterate a two-component view over a full world.
fn bench_view_iteration(c: &mut Criterion) {
    let registry = populated_registry(ENTITY_COUNT, 4);

    c.bench_function("view_position_velocity_65k", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for (_, (position, velocity)) in registry.view::<(Position, Velocity)>() {
                sum += position.x + velocity.x;
            }
            black_box(sum)
        });
    });
}

/// Benchmark: spawn/despawn churn through the free list.
fn bench_recycling_churn(c: &mut Criterion) {
    c.bench_function("recycle_churn_10k", |b| {
        let mut registry: Registry<u32> = Registry::with_types(TypeRegistry::new());
        let mut alive: Vec<_> = (0..10_000).map(|_| registry.spawn()).collect();

        b.iter(|| {
            for entity in alive.drain(..) {
                registry.despawn(entity);
            }
            for _ in 0..10_000 {
                alive.push(registry.spawn());
            }
            registry.alive_count()
        });
    });
}

criterion_group!(
    benches,
    bench_spawn_entities,
    bench_assign_components,
    bench_view_iteration,
    bench_recycling_churn
);
criterion_main!(benches);
