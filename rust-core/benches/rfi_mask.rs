use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;
use radio_toolbox::MaskConfig;

fn bench_rfi_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("rfi_mask");

    for &fft_size in &[1024usize, 16384, 262144] {
        let config = MaskConfig::new(10.0e6, 1420.0e6, fft_size).unwrap();
        let (low, high) = config.span();
        let rfi: Vec<f64> = (0..256)
            .map(|i| low + (high - low) * i as f64 / 255.0)
            .collect();

        group.bench_with_input(BenchmarkId::new("real", fft_size), &rfi, |b, rfi| {
            b.iter(|| config.build::<f64>(black_box(rfi)))
        });
        group.bench_with_input(BenchmarkId::new("complex", fft_size), &rfi, |b, rfi| {
            b.iter(|| config.build::<Complex64>(black_box(rfi)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rfi_mask);
criterion_main!(benches);
