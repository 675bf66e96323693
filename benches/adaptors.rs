use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazyview::{ops, view};

fn filter_map_take(c: &mut Criterion) {
    c.bench_function("filter_map_take", |b| {
        b.iter(|| {
            let v: Vec<i32> = (view(black_box(0..10_000))
                | ops::filter(|x: &i32| x % 3 == 0)
                | ops::map(|x| x * 2)
                | ops::take(1000))
            .collect();
            black_box(v)
        })
    });
}

fn chunks(c: &mut Criterion) {
    c.bench_function("chunks_64", |b| {
        b.iter(|| {
            let v: Vec<_> = (view(black_box(0..10_000)) | ops::chunks(64)).collect();
            black_box(v)
        })
    });
}

fn flatten_two_levels(c: &mut Criterion) {
    let nested: Vec<Vec<i32>> = (0..100).map(|i| (0..100).map(|j| i * j).collect()).collect();
    c.bench_function("flatten_two_levels", |b| {
        b.iter(|| {
            let v: Vec<i32> = lazyview::Flatten::new(black_box(nested.clone()).into_iter()).collect();
            black_box(v)
        })
    });
}

criterion_group!(benches, filter_map_take, chunks, flatten_two_levels);
criterion_main!(benches);
