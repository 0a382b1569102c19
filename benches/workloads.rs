use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lapse::{fibonacci_sequence, leibniz_pi, FibonacciMemo};

fn bench_leibniz_pi(c: &mut Criterion) {
    c.bench_function("leibniz_pi_100k", |b| {
        b.iter(|| leibniz_pi(black_box(100_000)).unwrap())
    });
}

fn bench_fibonacci_iterative(c: &mut Criterion) {
    c.bench_function("fib_iterative_41", |b| {
        b.iter(|| fibonacci_sequence(black_box(41)).unwrap())
    });
}

fn bench_fibonacci_memoized(c: &mut Criterion) {
    c.bench_function("fib_memoized_41", |b| {
        b.iter(|| {
            let mut memo = FibonacciMemo::new();
            memo.sequence(black_box(41)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_leibniz_pi,
    bench_fibonacci_iterative,
    bench_fibonacci_memoized
);
criterion_main!(benches);
