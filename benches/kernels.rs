//! Kernel-level benchmarks for lilo resize
//!
//! Run with: cargo bench --bench kernels

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lilo::kernels::{interpolation_weights, scale_rate};
use lilo::{resize_bilinear, BlockedDesc, Isa};

fn bench_weights(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation_weights");

    let sizes = [(56, 112), (112, 56), (224, 224), (640, 481)];
    for &(in_size, out_size) in &sizes {
        group.throughput(Throughput::Elements(out_size as u64));
        group.bench_with_input(
            BenchmarkId::new("build", format!("{}->{}", in_size, out_size)),
            &(in_size, out_size),
            |bencher, &(i, o)| {
                let rate = scale_rate(i, o);
                bencher.iter(|| interpolation_weights(black_box(i), black_box(o), black_box(rate)));
            },
        );
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_bilinear");

    // (batch, chan_blocks, block, ih, iw, oh, ow) - feature-map shapes from
    // detection/segmentation backbones
    let shapes = [
        (1, 4, 8, 56, 56, 112, 112),
        (1, 8, 16, 28, 28, 56, 56),
        (2, 2, 8, 64, 48, 128, 96),
        (1, 4, 8, 112, 112, 56, 56),
    ];

    let variants = [("scalar", Isa::Scalar), ("preferred", Isa::preferred())];

    for &(b, cb, block, ih, iw, oh, ow) in &shapes {
        let src_desc = BlockedDesc::packed(b, cb, block, ih, iw);
        let dst_desc = BlockedDesc::packed(b, cb, block, oh, ow);
        let src: Vec<f32> = (0..src_desc.len()).map(|i| (i % 255) as f32 / 255.0).collect();
        let mut dst = vec![0.0f32; dst_desc.len()];

        group.throughput(Throughput::Elements(dst_desc.len() as u64));
        for &(name, isa) in &variants {
            if !block_fits(block, isa) {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(name, format!("{}x{}x{}_{}x{}->{}x{}", b, cb, block, ih, iw, oh, ow)),
                &isa,
                |bencher, &isa| {
                    bencher.iter(|| {
                        resize_bilinear(
                            black_box(&src),
                            black_box(&mut dst),
                            &src_desc,
                            &dst_desc,
                            isa,
                        );
                    });
                },
            );
        }
    }

    group.finish();
}

fn block_fits(block: usize, isa: Isa) -> bool {
    block % isa.lanes() == 0
}

criterion_group!(benches, bench_weights, bench_resize);
criterion_main!(benches);
