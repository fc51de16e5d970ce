//! Benchmarks for the particle simulation and vertex generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glimmer_overlay::{EffectConfig, EffectSurface, Viewport};

const FRAME: f32 = 1.0 / 60.0;

fn busy_surface(starfield: bool) -> EffectSurface {
    let mut surface = EffectSurface::mount_seeded(
        EffectConfig {
            frequency: 150,
            range: 8.0,
            starfield,
        },
        Viewport::new(1280, 720),
        7,
    );
    // Warm up: a few bursts plus a steady ambient population.
    for i in 0..240 {
        if i % 60 == 0 {
            surface.clicked(0.0, 0.0);
        }
        surface.tick(FRAME);
    }
    surface
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulation Tick");

    let mut surface = busy_surface(false);
    group.bench_function("tick_steady_state", |b| {
        b.iter(|| {
            surface.tick(black_box(FRAME));
        });
    });

    let mut with_stars = busy_surface(true);
    group.bench_function("tick_with_starfield", |b| {
        b.iter(|| {
            with_stars.tick(black_box(FRAME));
        });
    });

    group.finish();
}

fn bench_vertices(c: &mut Criterion) {
    let mut group = c.benchmark_group("Vertex Generation");

    for starfield in [false, true] {
        let surface = busy_surface(starfield);
        let name = if starfield { "with_starfield" } else { "particles_only" };
        group.bench_with_input(BenchmarkId::new("vertices", name), &surface, |b, s| {
            b.iter(|| {
                black_box(s.vertices());
            });
        });
    }

    group.finish();
}

fn bench_burst_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("Burst Drain");

    group.bench_function("click_to_particles", |b| {
        let mut surface = EffectSurface::mount_seeded(
            EffectConfig {
                frequency: 0,
                range: 8.0,
                starfield: false,
            },
            Viewport::new(1280, 720),
            7,
        );
        b.iter(|| {
            surface.clicked(black_box(0.1), black_box(-0.2));
            surface.tick(FRAME);
            // Clear out so population does not grow across iterations.
            surface.tick(5.0);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_vertices, bench_burst_drain);
criterion_main!(benches);
