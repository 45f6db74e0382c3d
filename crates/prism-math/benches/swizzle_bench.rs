use criterion::{criterion_group, criterion_main, Criterion};
use prism_math::{swizzle, Color4ub, SwizzlePlan, Vec4};
use std::hint::black_box;

fn bench_swizzles(c: &mut Criterion) {
    let vectors: Vec<Vec4> = (0..10_000)
        .map(|i| {
            let f = i as f32;
            Vec4::new(f, f + 1.0, f + 2.0, f + 3.0)
        })
        .collect();
    let colors: Vec<Color4ub> = (0..10_000u32)
        .map(|i| Color4ub::new(i as u8, (i >> 8) as u8, 0x7f, 0xff))
        .collect();
    let plan: SwizzlePlan<4, 4> = match SwizzlePlan::parse("zyx1") {
        Ok(plan) => plan,
        Err(error) => panic!("benchmark plan rejected: {error}"),
    };

    let mut group = c.benchmark_group("Swizzle");

    group.bench_function("Compile-time pattern (zyx1)", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for v in &vectors {
                sum += swizzle!(*v, "zyx1").x();
            }
            black_box(sum);
        });
    });

    group.bench_function("Runtime plan (zyx1)", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for v in &vectors {
                sum += plan.apply(v).x();
            }
            black_box(sum);
        });
    });

    group.bench_function("Color channel reorder (bgra)", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for color in &colors {
                acc = acc.wrapping_add(swizzle!(*color, "bgra").r() as u32);
            }
            black_box(acc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_swizzles);
criterion_main!(benches);
