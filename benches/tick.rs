//! Benchmarks for the CPU tick: bare particle steps, engine ticks against a
//! discard surface, and the pixmap rasterizer.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glint::prelude::*;

/// Surface that swallows every draw call, isolating simulation cost.
struct DiscardSurface;

impl Surface for DiscardSurface {
    fn width(&self) -> u32 {
        640
    }

    fn height(&self) -> u32 {
        360
    }

    fn clear(&mut self) {}

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _alpha: f32) {}
}

/// Engine at steady state: emitters spread across the surface, run long
/// enough that births and deaths balance.
fn steady_engine(emitters: u32) -> Engine {
    let mut engine = Engine::with_seed(EngineConfig::default(), 42);
    let mut surface = DiscardSurface;
    for i in 0..emitters {
        engine.pointer_moved(Vec2::new(40.0 + 40.0 * i as f32, 180.0));
    }
    for _ in 0..150 {
        engine.tick(&mut surface);
    }
    engine
}

fn bench_particle_update(c: &mut Criterion) {
    c.bench_function("particle_update", |b| {
        let config = ParticleConfig::new().with_velocity(Vec2::new(1.2, -0.7));
        let mut particle = Particle::new(Vec2::new(320.0, 180.0), &config);
        b.iter(|| {
            particle.life = 1.0;
            black_box(particle.update())
        })
    });
}

fn bench_engine_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_tick");

    for emitters in [1u32, 4, 12] {
        group.bench_function(format!("{}_emitters_discard", emitters), |b| {
            let mut engine = steady_engine(emitters);
            let mut surface = DiscardSurface;
            b.iter(|| engine.tick(black_box(&mut surface)))
        });
    }

    group.bench_function("4_emitters_pixmap", |b| {
        let mut engine = steady_engine(4);
        let mut surface = Pixmap::new(640, 360);
        b.iter(|| engine.tick(black_box(&mut surface)))
    });

    group.finish();
}

fn bench_fill_circle(c: &mut Criterion) {
    c.bench_function("pixmap_fill_circle", |b| {
        let mut pixmap = Pixmap::new(640, 360);
        b.iter(|| {
            pixmap.fill_circle(
                black_box(Vec2::new(320.0, 180.0)),
                black_box(12.0),
                Color::hsl(200.0, 1.0, 0.5),
                0.6,
            )
        })
    });
}

criterion_group!(benches, bench_particle_update, bench_engine_tick, bench_fill_circle);
criterion_main!(benches);
