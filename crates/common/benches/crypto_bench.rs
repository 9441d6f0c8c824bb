//! Token encryption benchmarks
//!
//! Measures encrypt/decrypt cost for payload sizes typical of a school
//! timetable (tens of KB) and a full student roster (hundreds of KB).
//!
//! ```bash
//! cargo bench -p exitpass-common --features runtime --bench crypto_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use exitpass_common::crypto::{DataKey, EncryptionService};

const PAYLOAD_SIZES: [usize; 3] = [1024, 64 * 1024, 512 * 1024];

fn bench_token_round_trip(c: &mut Criterion) {
    let service = EncryptionService::new(&DataKey::generate()).unwrap();
    let mut group = c.benchmark_group("token_round_trip");

    for size in PAYLOAD_SIZES {
        let payload = vec![b'x'; size];
        let token = service.encrypt_token(&payload).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), &payload, |b, data| {
            b.iter(|| service.encrypt_token(black_box(data)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &token, |b, token| {
            b.iter(|| service.decrypt_token(black_box(token)).unwrap());
        });
    }

    group.finish();
}

fn bench_key_decode(c: &mut Criterion) {
    let encoded = DataKey::generate().to_base64();
    c.bench_function("key_from_base64", |b| {
        b.iter(|| DataKey::from_base64(black_box(&encoded)).unwrap());
    });
}

criterion_group!(benches, bench_token_round_trip, bench_key_decode);
criterion_main!(benches);
