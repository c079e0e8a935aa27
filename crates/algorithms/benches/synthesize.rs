//! Benchmarks for ramp synthesis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rampgen_algorithms::ramp::{synthesize, RampSize, RampSpec};
use rampgen_algorithms::synthesize_batch;
use rampgen_colormap::{Gradient, RemapCurve};
use rampgen_core::Rgba;
use rampgen_parallel::ProcessingMode;

fn stacked_ramp(name: &str, size: i64) -> RampSpec {
    let gradients = vec![
        Gradient::from_stops(&[
            (0.0, Rgba::BLACK),
            (0.3, Rgba::opaque(0.4, 0.1, 0.6)),
            (0.7, Rgba::opaque(0.9, 0.5, 0.2)),
            (1.0, Rgba::WHITE),
        ]),
        Gradient::linear(Rgba::opaque(0.0, 0.2, 0.8), Rgba::opaque(1.0, 1.0, 0.6)),
        Gradient::solid(Rgba::new(1.0, 1.0, 1.0, 0.5)),
    ];
    RampSpec::blended(
        name,
        gradients,
        RemapCurve::ease_in_out(0.0, 0.0, 3.0, 2.0),
        RampSize::new(size, size),
    )
}

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");

    for size in [64, 256, 1024, 2048].iter() {
        let spec = stacked_ramp("bench", *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| synthesize(black_box(&spec)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize_batch");
    let batch: Vec<RampSpec> = (0..16).map(|i| stacked_ramp(&format!("ramp_{i}"), 256)).collect();

    for (label, mode) in [
        ("sequential", ProcessingMode::Sequential),
        ("parallel", ProcessingMode::Parallel),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| synthesize_batch(black_box(&batch), mode).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_synthesize, bench_batch);
criterion_main!(benches);
