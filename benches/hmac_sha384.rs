use hmac384::mac::{HmacSha384, hmac_sha384};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_hmac_sha384(c: &mut Criterion) {
    c.bench_function("hmac-sha384 oneshot 64 bytes", |b| {
        b.iter(|| {
            hmac_sha384(
                Some(black_box(b"benchmark key")),
                black_box(&[0u8; 64]),
            )
        })
    });

    let mut mac = HmacSha384::new(Some(b"benchmark key")).unwrap();
    c.bench_function("hmac-sha384 reused context 64 bytes", |b| {
        b.iter(|| mac.compute(black_box(&[0u8; 64])))
    });
}

criterion_group!(benches, bench_hmac_sha384);
criterion_main!(benches);
