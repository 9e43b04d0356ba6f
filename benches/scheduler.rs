use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use space_garbage::core::{update_speed, NoInput, Sprite, World};
use space_garbage::engine::{Scene, SceneAssets, SceneConfig};
use space_garbage::term::{encode_diff_into, FrameBuffer};

fn assets() -> SceneAssets {
    SceneAssets {
        rocket: vec![Rc::new(Sprite::new("  .\n / \\\n|   |\n|   |\n/|||\\"))],
        garbage: vec![
            Rc::new(Sprite::new(" ___\n|   |\n|___|")),
            Rc::new(Sprite::new("(o)")),
        ],
    }
}

fn bench_scene_tick(c: &mut Criterion) {
    let mut fb = FrameBuffer::new(120, 40);
    let config = SceneConfig {
        start_year: 2020,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new(config, assets(), (40, 120));

    // Fill the sky with garbage first.
    for _ in 0..200 {
        let _ = scene.tick(&mut fb, &mut NoInput);
    }

    c.bench_function("scene_tick_2020", |b| {
        b.iter(|| {
            let _ = scene.tick(&mut fb, &mut NoInput);
        })
    });
}

fn bench_check_collision(c: &mut Criterion) {
    let mut world = World::default();
    for i in 0..100 {
        world.add_obstacle((i % 20) as f64 * 2.0, (i / 20) as f64 * 8.0, 3, 5);
    }

    c.bench_function("check_collision_100", |b| {
        b.iter(|| world.check_collision(black_box(39.5), black_box(38.0)))
    });
}

fn bench_update_speed(c: &mut Criterion) {
    c.bench_function("update_speed", |b| {
        b.iter(|| update_speed(black_box(1.2), black_box(-0.4), black_box(-1), black_box(1)))
    });
}

fn bench_renderer_diff(c: &mut Criterion) {
    let mut fb = FrameBuffer::new(120, 40);
    let mut scene = Scene::new(SceneConfig::default(), assets(), (40, 120));
    let _ = scene.tick(&mut fb, &mut NoInput);
    let prev = fb.clone();
    let _ = scene.tick(&mut fb, &mut NoInput);

    let mut out = Vec::with_capacity(64 * 1024);
    c.bench_function("encode_diff_one_tick", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&fb), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_scene_tick,
    bench_check_collision,
    bench_update_speed,
    bench_renderer_diff
);
criterion_main!(benches);
