// SPDX-License-Identifier: MIT
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poseidon_bls12381::{
    hash, hash_2, hash_4, Felt, Poseidon2, Poseidon4, POSEIDON2_WIDTH, POSEIDON4_WIDTH,
};
use rand::{rngs::SmallRng, RngCore, SeedableRng};

fn random_felt(rng: &mut SmallRng) -> Felt {
    Felt::from_u256_le([
        rng.next_u64(),
        rng.next_u64(),
        rng.next_u64(),
        rng.next_u64(),
    ])
}

fn bench_permutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Permutations");
    let mut rng = SmallRng::seed_from_u64(42);

    group.bench_function("Poseidon2::apply", |b| {
        let mut state = [Felt::ZERO; POSEIDON2_WIDTH];
        for slot in state.iter_mut() {
            *slot = random_felt(&mut rng);
        }
        b.iter(|| Poseidon2::apply(black_box(&mut state)))
    });

    group.bench_function("Poseidon4::apply", |b| {
        let mut state = [Felt::ZERO; POSEIDON4_WIDTH];
        for slot in state.iter_mut() {
            *slot = random_felt(&mut rng);
        }
        b.iter(|| Poseidon4::apply(black_box(&mut state)))
    });

    group.finish();
}

fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hash Entry Points");
    let mut rng = SmallRng::seed_from_u64(42);

    let x = random_felt(&mut rng);
    let y = random_felt(&mut rng);
    let z = random_felt(&mut rng);
    let w = random_felt(&mut rng);

    group.bench_function("hash_2", |b| {
        b.iter(|| hash_2(black_box(x), black_box(y)))
    });

    group.bench_function("hash_4", |b| {
        b.iter(|| hash_4(black_box(w), black_box(x), black_box(y), black_box(z)))
    });

    for len in [4usize, 16, 64, 256] {
        let inputs: Vec<Felt> = (0..len).map(|_| random_felt(&mut rng)).collect();
        group.bench_with_input(
            criterion::BenchmarkId::new("hash", len),
            &inputs,
            |b, inputs| b.iter(|| hash(black_box(inputs))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_permutations, bench_hashing);
criterion_main!(benches);
