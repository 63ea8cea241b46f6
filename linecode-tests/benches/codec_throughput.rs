use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linecode_core::{diff_manchester_decode, diff_manchester_encode, hdb3_decode, hdb3_encode, Bit};

const FRAME: usize = 1024;

/// Deterministic frame with long zero runs mixed in
fn frame() -> Vec<Bit> {
    (0..FRAME)
        .map(|i| if (i * 7) % 13 < 4 || i % 64 < 8 { Bit::Zero } else { Bit::One })
        .collect()
}

fn bench_hdb3(c: &mut Criterion) {
    let bits = frame();
    c.bench_function("hdb3_encode_1024", |b| {
        b.iter(|| hdb3_encode::<FRAME>(black_box(&bits)).unwrap())
    });

    let encoded = hdb3_encode::<FRAME>(&bits).unwrap();
    c.bench_function("hdb3_decode_1024", |b| {
        b.iter(|| hdb3_decode::<FRAME>(black_box(&encoded.samples)).unwrap())
    });
}

fn bench_diff_manchester(c: &mut Criterion) {
    let bits = frame();
    c.bench_function("diff_manchester_encode_1024", |b| {
        b.iter(|| diff_manchester_encode::<{ FRAME * 2 }>(black_box(&bits)).unwrap())
    });

    let encoded = diff_manchester_encode::<{ FRAME * 2 }>(&bits).unwrap();
    c.bench_function("diff_manchester_decode_1024", |b| {
        b.iter(|| diff_manchester_decode::<FRAME>(black_box(&encoded)).unwrap())
    });
}

criterion_group!(benches, bench_hdb3, bench_diff_manchester);
criterion_main!(benches);
