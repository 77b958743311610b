//! Benchmarks for terrain generation, peak detection and river tracing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geomap_algorithms::analysis::{run_analysis, AnalysisParams};
use geomap_algorithms::hydrology::{trace_rivers, RiverParams};
use geomap_algorithms::terrain::{
    gaussian_smooth, generate_terrain, local_maxima, GaussianParams, MaximaParams, TerrainParams,
};
use geomap_core::Raster;

fn terrain_params(size: usize) -> TerrainParams {
    TerrainParams {
        size,
        ..TerrainParams::default()
    }
}

/// Rolling field with many small peaks and pits
fn create_field(size: usize) -> Raster<f64> {
    Raster::from_fn(size, size, |row, col| {
        let x = col as f64 * 0.21;
        let y = row as f64 * 0.17;
        x.sin() * y.cos() + 0.3 * (0.5 * x + 0.7 * y).sin()
    })
}

fn bench_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain/gaussian_smooth");
    for size in [128, 256, 512] {
        let field = create_field(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| gaussian_smooth(black_box(&field), GaussianParams::with_sigma(3.0)).unwrap())
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain/generate");
    for size in [100, 300, 600] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| generate_terrain(black_box(terrain_params(size))).unwrap())
        });
    }
    group.finish();
}

fn bench_maxima(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain/local_maxima");
    for size in [256, 512, 1024] {
        let field = create_field(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| local_maxima(black_box(&field), MaximaParams::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_rivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("hydrology/trace_rivers");
    for size in [256, 512, 1024] {
        let field = create_field(size);
        let peaks = local_maxima(&field, MaximaParams::default()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| trace_rivers(black_box(&field), &peaks, RiverParams::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("analysis/run_default", |b| {
        b.iter(|| run_analysis(black_box(AnalysisParams::default())).unwrap())
    });
}

criterion_group!(
    benches,
    bench_smoothing,
    bench_generate,
    bench_maxima,
    bench_rivers,
    bench_pipeline
);
criterion_main!(benches);
