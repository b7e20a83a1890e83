use criterion::{black_box, criterion_group, criterion_main, Criterion};
use texture_autocorr::{radial_autocorrelation, GrayscaleImage, SyntheticPattern};

fn bench_radial_autocorrelation(c: &mut Criterion) {
    let mut group = c.benchmark_group("radial_autocorrelation");
    for size in [64, 128, 256] {
        let image = GrayscaleImage::synthetic(SyntheticPattern::Checkerboard, size);
        group.bench_function(format!("checkerboard_{size}x{size}"), |b| {
            b.iter(|| radial_autocorrelation(black_box(&image)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_radial_autocorrelation);
criterion_main!(benches);
