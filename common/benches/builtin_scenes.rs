use criterion::{criterion_group, criterion_main, Criterion};

use glhelper_common::scene_loader::SceneLoader;
use glhelper_common::scenes::Builtin;

pub fn builtin_scenes(c: &mut Criterion) {
    c.bench_function("builtin_scenes", |b| {
        b.iter(|| Builtin::ALL.map(|builtin| builtin.build()))
    });
}

pub fn scene_loader(c: &mut Criterion) {
    let src = r#"{
        items: [{
            shape: { group: [
                { shape: { polygon: { radius: 0.5, sides: 60 } }, transforms: [{ remove_sides: 10 }] },
                { shape: { star: { radius: 0.2, points: 5, center: [0.5, 0.5] } }, transforms: [{ rotate: { angle: 18 } }] },
            ] },
        }],
    }"#;

    c.bench_function("scene_loader", |b| {
        b.iter(|| SceneLoader::load_from_str(src))
    });
}

criterion_group!(benches, builtin_scenes, scene_loader);
criterion_main!(benches);
