use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazyview::{Product, Zip2, ZipLongest2};

fn zip2(c: &mut Criterion) {
    let a: Vec<i32> = (0..10_000).collect();
    let b: Vec<i32> = (0..10_000).collect();
    c.bench_function("zip2", |bench| {
        bench.iter(|| {
            let sum: i64 = Zip2::new(black_box(a.clone()).into_iter(), black_box(b.clone()).into_iter())
                .map(|(x, y)| i64::from(x) + i64::from(y))
                .sum();
            black_box(sum)
        })
    });
}

fn zip_longest(c: &mut Criterion) {
    let a: Vec<i32> = (0..10_000).collect();
    let b: Vec<i32> = (0..7_000).collect();
    c.bench_function("zip_longest", |bench| {
        bench.iter(|| {
            let v: Vec<_> =
                ZipLongest2::new(black_box(a.clone()).into_iter(), black_box(b.clone()).into_iter())
                    .collect();
            black_box(v)
        })
    });
}

fn cartesian_product(c: &mut Criterion) {
    let a: Vec<i32> = (0..100).collect();
    let b: Vec<i32> = (0..100).collect();
    c.bench_function("cartesian_product_100x100", |bench| {
        bench.iter(|| {
            let count = Product::new(black_box(a.clone()).into_iter(), black_box(b.clone()).into_iter())
                .count();
            black_box(count)
        })
    });
}

criterion_group!(benches, zip2, zip_longest, cartesian_product);
criterion_main!(benches);
