use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daemon_osutil::{clock, verify, Jitter};

fn bench_validators(c: &mut Criterion) {
    let hex = "0123456789abcdef0123456789abcdef01234567";
    let base32 = "abcdefghijklmnopqrstuvwxyz234567";

    c.bench_function("is_hex_40", |b| {
        b.iter(|| verify::is_hex(black_box(40), black_box(hex)));
    });

    c.bench_function("is_base32_32", |b| {
        b.iter(|| verify::is_base32(black_box(32), black_box(base32)));
    });
}

fn bench_jitter(c: &mut Criterion) {
    let mut jitter = Jitter::from_seed(42);

    c.bench_function("symmetric_unit", |b| {
        b.iter(|| black_box(jitter.symmetric_unit()));
    });
}

fn bench_clock(c: &mut Criterion) {
    c.bench_function("now_seconds", |b| {
        b.iter(|| black_box(clock::now_seconds().unwrap()));
    });
}

criterion_group!(benches, bench_validators, bench_jitter, bench_clock);
criterion_main!(benches);
