// SPDX-License-Identifier: MIT
//! # `poseidon-bls12381`
//!
//! Poseidon permutation hashing over the BLS12-381 scalar field, in the
//! two fixed instances used for on-chain-verifiable digests: a width-3
//! permutation for 2-input hashing and a width-5 permutation for 4-input
//! hashing. Outputs are bit-identical to the off-chain reference
//! implementation for every input, including values at the field
//! boundary.
//!
//! ## High-level architecture
//! * **Field arithmetic** – delegated to the [`bls12_381`] crate, which
//!   exposes constant-time Montgomery routines for Fr; the [`Felt`]
//!   wrapper adds the boundary policies and the quintic S-box.
//! * **Parameter tables** – immutable round constants and MDS matrices
//!   embedded per width, with the Grain derivation that produced them
//!   reproduced in [`params`] for verification.
//! * **Permutation core** – the full/partial/full round schedule
//!   ([`Poseidon2`], [`Poseidon4`]).
//! * **Hash wrapper** – fixed-arity entry points plus a rate-driven
//!   [`Sponge`] for variable-length input.
//! * **Unrolled-code generator** – offline transform in [`codegen`]
//!   emitting a branch-free realization of the exact round sequence.

//  ---------------------------------------------------------------------------
//  Modules & re-exports
//  ---------------------------------------------------------------------------
pub mod codegen;
#[doc(hidden)]
pub mod constants;
mod error;
mod field;
#[doc(hidden)]
pub mod mds;
pub mod params;
mod permutation;

pub use error::PoseidonError;
pub use field::{Felt, MODULUS_LIMBS};
pub use params::{GrainLfsr, PoseidonParams};
pub use permutation::{permutation, Permutation, Poseidon2, Poseidon4};

use tinyvec::ArrayVec;

/// State width of the 2-input permutation.
pub const POSEIDON2_WIDTH: usize = 3;
/// State width of the 4-input permutation.
pub const POSEIDON4_WIDTH: usize = 5;
/// Full rounds per permutation call, split evenly around the partial block.
pub const FULL_ROUNDS: usize = 8;
pub const HALF_FULL_ROUNDS: usize = FULL_ROUNDS / 2;
/// Partial rounds per permutation call. The reference schedules 56 for
/// both widths; matching it is the correctness contract, so this is not
/// the place to "fix" the width-3 count to the textbook 57.
pub const PARTIAL_ROUNDS: usize = 56;
pub const TOTAL_ROUNDS: usize = FULL_ROUNDS + PARTIAL_ROUNDS;

const MAX_WIDTH: usize = POSEIDON4_WIDTH;

//  ---------------------------------------------------------------------------
//  Fixed-arity hashing
//  ---------------------------------------------------------------------------

/// Hash a single element: width-3 permutation over `[0, x, 0]`.
pub fn hash_1(x: Felt) -> Felt {
    hash_2(x, Felt::ZERO)
}

/// Hash two elements: width-3 permutation over `[0, x, y]`, digest is the
/// first state slot. Slot 0 is the capacity element and always starts at
/// zero.
pub fn hash_2(x: Felt, y: Felt) -> Felt {
    let mut state = [Felt::ZERO, x, y];
    Poseidon2::apply(&mut state);
    state[0]
}

/// Hash four elements: width-5 permutation over `[0, w, x, y, z]`.
pub fn hash_4(w: Felt, x: Felt, y: Felt, z: Felt) -> Felt {
    let mut state = [Felt::ZERO, w, x, y, z];
    Poseidon4::apply(&mut state);
    state[0]
}

/// Hash any number of elements with the width-3 permutation: rate-2
/// absorb cycles, each feeding the previous cycle's digest back into the
/// capacity slot, the final short block zero-padded. Coincides with
/// [`hash_2`] (resp. [`hash_1`]) for two (one) inputs.
pub fn hash(inputs: &[Felt]) -> Felt {
    let mut sponge: Sponge<Poseidon2> = Sponge::new();
    sponge.absorb_many(inputs);
    sponge.squeeze()
}

//  ---------------------------------------------------------------------------
//  Integer-accepting wrappers
//  ---------------------------------------------------------------------------
//  Raw 256-bit inputs (little-endian limbs) are reduced mod p before
//  hashing, the reference's observed policy, applied uniformly. Strict
//  validation lives on `Felt::from_bytes_le` / `Felt::from_hex` instead.

pub fn hash_1_u256(x: [u64; 4]) -> [u64; 4] {
    hash_1(Felt::from_u256_le(x)).to_u256_le()
}

pub fn hash_2_u256(x: [u64; 4], y: [u64; 4]) -> [u64; 4] {
    hash_2(Felt::from_u256_le(x), Felt::from_u256_le(y)).to_u256_le()
}

pub fn hash_4_u256(w: [u64; 4], x: [u64; 4], y: [u64; 4], z: [u64; 4]) -> [u64; 4] {
    hash_4(
        Felt::from_u256_le(w),
        Felt::from_u256_le(x),
        Felt::from_u256_le(y),
        Felt::from_u256_le(z),
    )
    .to_u256_le()
}

//  ---------------------------------------------------------------------------
//  Sponge construction
//  ---------------------------------------------------------------------------

/// Streaming hash instance over either permutation.
///
/// Absorbs `WIDTH - 1` elements per cycle; each full block is hashed as
/// `[digest, block...]` with the running digest in the capacity slot
/// (zero before the first block).
#[derive(Clone)]
pub struct Sponge<P> {
    digest: Felt,
    buf: ArrayVec<[Felt; MAX_WIDTH - 1]>,
    blocks: u64,
    _marker: core::marker::PhantomData<P>,
}

impl<P: Permutation> Default for Sponge<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Permutation> Sponge<P> {
    pub fn new() -> Self {
        Self {
            digest: Felt::ZERO,
            buf: ArrayVec::new(),
            blocks: 0,
            _marker: core::marker::PhantomData,
        }
    }

    /// Absorb a single field element.
    pub fn absorb(&mut self, element: Felt) {
        self.buf.push(element);
        if self.buf.len() == P::WIDTH - 1 {
            self.cycle();
        }
    }

    pub fn absorb_many(&mut self, elements: &[Felt]) {
        for &e in elements {
            self.absorb(e);
        }
    }

    /// Run one permutation over the buffered block, zero-padded to the
    /// rate, and fold the output into the running digest.
    fn cycle(&mut self) {
        let mut state = [Felt::ZERO; MAX_WIDTH];
        state[0] = self.digest;
        for (slot, e) in self.buf.drain(..).enumerate() {
            state[1 + slot] = e;
        }
        P::apply_slice(&mut state[..P::WIDTH]);
        self.digest = state[0];
        self.blocks += 1;
    }

    /// Extract the digest. A trailing short block (or an empty input)
    /// still costs one permutation, so the empty hash is well-defined.
    pub fn squeeze(mut self) -> Felt {
        if !self.buf.is_empty() || self.blocks == 0 {
            self.cycle();
        }
        self.digest
    }
}

//  ---------------------------------------------------------------------------
//  TESTS
//  ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_arity_matches_sponge_at_rate() {
        let x = Felt::from(11u64);
        let y = Felt::from(22u64);
        assert_eq!(hash(&[x, y]), hash_2(x, y));
        assert_eq!(hash(&[x]), hash_1(x));
    }

    #[test]
    fn empty_hash_is_the_zero_block() {
        assert_eq!(hash(&[]), hash_2(Felt::ZERO, Felt::ZERO));
    }

    #[test]
    fn longer_inputs_chain_through_the_capacity_slot() {
        let xs: Vec<Felt> = (1u64..=3).map(Felt::from).collect();
        let first = hash_2(xs[0], xs[1]);
        let mut state = [first, xs[2], Felt::ZERO];
        Poseidon2::apply(&mut state);
        assert_eq!(hash(&xs), state[0]);
    }

    #[test]
    fn u256_wrappers_reduce_implicitly() {
        let mut over = MODULUS_LIMBS;
        over[0] = over[0].wrapping_add(9);
        // p + 9 hashes like 9, on every entry point
        assert_eq!(
            hash_2_u256(over, [0; 4]),
            hash_2(Felt::from(9u64), Felt::ZERO).to_u256_le()
        );
        assert_eq!(hash_1_u256(over), hash_1(Felt::from(9u64)).to_u256_le());
        assert_eq!(
            hash_4_u256(over, [0; 4], [0; 4], [0; 4]),
            hash_4(Felt::from(9u64), Felt::ZERO, Felt::ZERO, Felt::ZERO).to_u256_le()
        );
    }

    #[test]
    fn width5_sponge_consumes_four_per_cycle() {
        let xs: Vec<Felt> = (1u64..=4).map(Felt::from).collect();
        let mut sponge: Sponge<Poseidon4> = Sponge::new();
        sponge.absorb_many(&xs);
        assert_eq!(sponge.squeeze(), hash_4(xs[0], xs[1], xs[2], xs[3]));
    }
}
