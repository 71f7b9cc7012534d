#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use flex_array::TypedArray;

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("array push_back {} values", count), |b| {
            b.iter(|| {
                let mut buf = TypedArray::<usize>::new();
                for value in 0..count {
                    buf.push_back(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("array reserve({0}) push_back {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = TypedArray::<usize>::new();
                    buf.reserve(count);
                    for value in 0..count {
                        buf.push_back(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("array push_front {} values", count), |b| {
            b.iter(|| {
                let mut buf = TypedArray::<usize>::new();
                for value in 0..count {
                    buf.push_front(black_box(value));
                }
            });
        });

        c.bench_function(&format!("stdvec insert(0) {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.insert(0, black_box(value));
                }
            });
        });

        c.bench_function(&format!("array extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = TypedArray::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });

        c.bench_function(&format!("stdvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });

        c.bench_function(&format!("array insert_range into {} values", count), |b| {
            let data: Vec<usize> = (0..SMALL_COUNT).collect();
            b.iter(|| {
                let mut buf = TypedArray::<usize>::with_capacity(count);
                buf.extend(0..count);
                buf.insert_range(count / 2, black_box(&data[..]));
            });
        });

        c.bench_function(&format!("stdvec splice into {} values", count), |b| {
            let data: Vec<usize> = (0..SMALL_COUNT).collect();
            b.iter(|| {
                let mut buf = Vec::<usize>::with_capacity(count);
                buf.extend(0..count);
                let mid = count / 2;
                buf.splice(mid..mid, black_box(&data[..]).iter().cloned());
            });
        });

        c.bench_function(&format!("array lower_bound in {} values", count), |b| {
            let buf: TypedArray<usize> = (0..count).map(|v| v * 2).collect();
            b.iter(|| {
                for key in 0..count {
                    black_box(buf.lower_bound(black_box(&key)));
                }
            });
        });

        c.bench_function(&format!("stdvec partition_point in {} values", count), |b| {
            let buf: Vec<usize> = (0..count).map(|v| v * 2).collect();
            b.iter(|| {
                for key in 0..count {
                    black_box(buf.partition_point(|v| v < black_box(&key)));
                }
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
