//! Benches for the two hot paths: height synthesis (dominates startup, run
//! once per world vertex) and the per-frame streaming window rewrite.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use terrain::heightfield::HeightField;
use terrain::streaming::StreamingController;
use terrain::tiles::TerrainLayout;

fn bench_height_sample(c: &mut Criterion) {
    let field = HeightField::from_seed(0.42);
    let mut x = 0.0f64;
    c.bench_function("height_sample", |b| {
        b.iter(|| {
            x += 1.0;
            black_box(field.sample(black_box(x), black_box(x * 0.37)))
        })
    });
}

fn bench_stream_window_update(c: &mut Criterion) {
    let layout = TerrainLayout::new(32, 32, 8, 1.0).expect("valid layout");
    let mut controller = StreamingController::default();
    let mut x = 0.0f32;
    c.bench_function("stream_window_update", |b| {
        b.iter(|| {
            x += 1.0;
            let change = controller.update(black_box(x), 0.0, &layout);
            black_box(change.shown.len())
        })
    });
}

criterion_group!(benches, bench_height_sample, bench_stream_window_update);
criterion_main!(benches);
