#![allow(clippy::unit_arg)]

use std::hint::black_box;

use base64::{engine::general_purpose::STANDARD, Engine};
use criterion::{
    criterion_group, criterion_main, BatchSize, Bencher, BenchmarkId, Criterion, Throughput,
};
use rand::Rng;
use sealed_video::{
    frame::{EncryptedFrame, AUTH_TAG_LEN, NONCE_LEN},
    key::{import_key, KeyCapability, SymmetricKey},
};

const BUF_OVERHEAD: usize = NONCE_LEN + AUTH_TAG_LEN;

fn payload_sizes() -> &'static [usize] {
    let ci = std::env::var("CI").ok();
    if ci.is_some_and(|ci| ci == "true") {
        return &[65536];
    }

    // short clip chunks up to a whole clip of a few megabytes
    &[1024, 65536, 1048576, 8388608]
}

struct CryptoBenches {
    base64_key: String,
    key_len: usize,

    crypt_buffer: Vec<u8>,
    enc_key: SymmetricKey,
    dec_key: SymmetricKey,
}

impl From<usize> for CryptoBenches {
    fn from(key_len: usize) -> Self {
        let mut key_material = vec![0u8; key_len];
        rand::rng().fill(key_material.as_mut_slice());
        let base64_key = STANDARD.encode(&key_material);

        let enc_key = import_key(&base64_key, KeyCapability::Encrypt).unwrap();
        let dec_key = import_key(&base64_key, KeyCapability::Decrypt).unwrap();

        let max_payload_size = payload_sizes().iter().max().unwrap();
        let crypt_buffer = Vec::with_capacity(max_payload_size + BUF_OVERHEAD);

        Self {
            base64_key,
            key_len,
            crypt_buffer,
            enc_key,
            dec_key,
        }
    }
}

impl CryptoBenches {
    fn run_benches(&mut self, c: &mut Criterion) {
        let suite = self.enc_key.cipher_suite();

        bench_over_payload_sizes(c, &format!("encrypt with {suite}"), |b, &payload_size| {
            b.iter_batched(
                || random_payload(payload_size),
                |plaintext| {
                    let encrypted = self
                        .enc_key
                        .encrypt_into(&plaintext, &mut self.crypt_buffer)
                        .unwrap();
                    black_box(encrypted);
                },
                BatchSize::LargeInput,
            );
        });

        bench_over_payload_sizes(c, &format!("decrypt with {suite}"), |b, &payload_size| {
            b.iter_batched(
                || encrypt_random_payload(payload_size, &self.enc_key),
                |encrypted| {
                    let decrypted = encrypted
                        .decrypt_into(&self.dec_key, &mut self.crypt_buffer)
                        .unwrap();
                    black_box(decrypted);
                },
                BatchSize::LargeInput,
            );
        });

        c.bench_function(&format!("import {} bit key", self.key_len * 8), |b| {
            b.iter(|| {
                let key = import_key(&self.base64_key, KeyCapability::Decrypt).unwrap();
                black_box(key);
            });
        });
    }
}

fn bench_over_payload_sizes<F>(c: &mut Criterion, name: &str, mut bench: F)
where
    F: FnMut(&mut Bencher, &usize),
{
    let mut group = c.benchmark_group(name);
    for payload_size in payload_sizes().iter() {
        group.throughput(Throughput::Bytes(*payload_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(payload_size),
            payload_size,
            &mut bench,
        );
    }
    group.finish();
}

fn random_payload(size: usize) -> Vec<u8> {
    let mut payload = vec![0; size];
    rand::rng().fill(payload.as_mut_slice());
    payload
}

fn encrypt_random_payload(size: usize, enc_key: &SymmetricKey) -> EncryptedFrame {
    enc_key.encrypt(random_payload(size)).unwrap()
}

fn crypto_benches(c: &mut Criterion) {
    for key_len in [
        16,
        #[cfg(not(feature = "ring"))]
        24,
        32,
    ] {
        let mut ctx = CryptoBenches::from(key_len);
        ctx.run_benches(c);
    }
}

criterion_group!(benches, crypto_benches);
criterion_main!(benches);
