use std::time::Duration;

use bytechan::{ByteChannel, Status, DEFAULT_READ_CHUNK};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_throughput(c: &mut Criterion) {
    let channel = ByteChannel::new(1 << 16);
    let payload = [0x11u8; DEFAULT_READ_CHUNK];

    c.bench_function("offer_drain_roundtrip_512b", |b| {
        b.iter(|| {
            assert_eq!(channel.offer(&payload), Status::NoError);
            let result = channel.drain(payload.len(), payload.len(), Duration::from_millis(1));
            assert_eq!(result.data.len(), payload.len());
        })
    });
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
