use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use simple_rsa::rsa::{decrypt_sequence, encrypt_sequence, generate_keys};

fn bench_keygen(c: &mut Criterion) {
    c.bench_function("generate_keys 65521 x 65519", |b| {
        b.iter(|| generate_keys(black_box(65_521), black_box(65_519)).unwrap());
    });
}

fn bench_transform(c: &mut Criterion) {
    let keypair = generate_keys(65_521, 65_519).unwrap();
    let data: Vec<u8> = (0..4096u32).map(|i| (i % 256) as u8).collect();

    c.bench_function("encrypt_sequence 4KB", |b| {
        b.iter(|| encrypt_sequence(black_box(&data), &keypair.public_key));
    });

    let ciphertext = encrypt_sequence(&data, &keypair.public_key);
    c.bench_function("decrypt_sequence 4KB", |b| {
        b.iter(|| decrypt_sequence(black_box(&ciphertext), &keypair.private_key));
    });
}

criterion_group!(benches, bench_keygen, bench_transform);
criterion_main!(benches);
