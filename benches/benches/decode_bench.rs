use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use img_core::{Compat, ImgDecoder};

/// Файл nx × ny: заголовок и выборки пилообразного паттерна.
fn build_file(
    nx: usize,
    ny: usize,
    complex: bool,
    double: bool,
) -> Vec<u8> {
    let scalars = if complex { 2 } else { 1 };
    let width = match (complex, double) {
        (false, false) => 4,
        (false, true) => 8,
        (true, false) => 8,
        (true, true) => 16,
    };

    let mut buf = Vec::new();
    for v in [0, 0, 0, ny as i32, nx as i32, complex as i32, width, 0] {
        buf.extend_from_slice(&v.to_ne_bytes());
    }
    for v in [0.0f64, 1.0, 1.0] {
        buf.extend_from_slice(&v.to_ne_bytes());
    }

    for k in 0..nx * ny * scalars {
        let v = (k % 251) as f64;
        if double {
            buf.extend_from_slice(&v.to_ne_bytes());
        } else {
            buf.extend_from_slice(&(v as f32).to_ne_bytes());
        }
    }
    buf
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &side in &[64usize, 256, 1024] {
        for &(name, complex, double) in &[
            ("f32", false, false),
            ("f64", false, true),
            ("c64", true, false),
            ("c128", true, true),
        ] {
            let raw = build_file(side, side, complex, double);
            group.throughput(Throughput::Bytes(raw.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, side), &raw, |b, raw| {
                b.iter(|| {
                    let decoded = ImgDecoder::new(raw.as_slice(), Compat::Legacy)
                        .decode()
                        .unwrap();
                    black_box(decoded.data.len())
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
