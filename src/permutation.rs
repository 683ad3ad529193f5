// SPDX-License-Identifier: MIT
//! The permutation core: the full/partial/full round schedule.
//!
//! Three phases in strict order: 4 full rounds, 56 partial rounds,
//! 4 full rounds. Every round adds `t` fresh constants (round-major
//! order), applies the quintic S-box (all slots in full rounds, slot 0
//! only in partial rounds), then multiplies the state by the MDS matrix.
//! There is no linear layer before round 0: the first operation a state
//! sees is round 0's constant addition.

use crate::error::PoseidonError;
use crate::field::Felt;
use crate::{constants, mds, HALF_FULL_ROUNDS, PARTIAL_ROUNDS, TOTAL_ROUNDS};
use crate::{POSEIDON2_WIDTH, POSEIDON4_WIDTH};

#[inline(always)]
fn add_constants<const T: usize>(state: &mut [Felt; T], rc: &[Felt; T]) {
    for (s, c) in state.iter_mut().zip(rc) {
        *s += *c;
    }
}

/// Matrix-vector product, row by row; each row's dot product accumulates
/// via mul + add over a copy of the incoming state.
#[inline(always)]
fn mul_matrix<const T: usize>(state: &mut [Felt; T], m: &[[Felt; T]; T]) {
    let s = *state;
    for i in 0..T {
        let mut acc = m[i][0] * s[0];
        for j in 1..T {
            acc += m[i][j] * s[j];
        }
        state[i] = acc;
    }
}

#[inline(always)]
fn full_round<const T: usize>(state: &mut [Felt; T], rc: &[Felt; T], m: &[[Felt; T]; T]) {
    add_constants(state, rc);
    for s in state.iter_mut() {
        *s = s.quintic();
    }
    mul_matrix(state, m);
}

#[inline(always)]
fn partial_round<const T: usize>(state: &mut [Felt; T], rc: &[Felt; T], m: &[[Felt; T]; T]) {
    add_constants(state, rc);
    state[0] = state[0].quintic();
    mul_matrix(state, m);
}

fn apply_rounds<const T: usize>(
    state: &mut [Felt; T],
    rc: &[[Felt; T]; TOTAL_ROUNDS],
    m: &[[Felt; T]; T],
) {
    let mut round = 0;
    for _ in 0..HALF_FULL_ROUNDS {
        full_round(state, &rc[round], m);
        round += 1;
    }
    for _ in 0..PARTIAL_ROUNDS {
        partial_round(state, &rc[round], m);
        round += 1;
    }
    for _ in 0..HALF_FULL_ROUNDS {
        full_round(state, &rc[round], m);
        round += 1;
    }
}

/// As [`apply_rounds`], snapshotting the state after every round. Used to
/// localize the first diverging round when diffing against another
/// implementation.
fn apply_rounds_with_trace<const T: usize>(
    state: &mut [Felt; T],
    rc: &[[Felt; T]; TOTAL_ROUNDS],
    m: &[[Felt; T]; T],
) -> Vec<[Felt; T]> {
    let mut trace = Vec::with_capacity(TOTAL_ROUNDS);
    let mut round = 0;
    for _ in 0..HALF_FULL_ROUNDS {
        full_round(state, &rc[round], m);
        trace.push(*state);
        round += 1;
    }
    for _ in 0..PARTIAL_ROUNDS {
        partial_round(state, &rc[round], m);
        trace.push(*state);
        round += 1;
    }
    for _ in 0..HALF_FULL_ROUNDS {
        full_round(state, &rc[round], m);
        trace.push(*state);
        round += 1;
    }
    trace
}

/// Stateless width-3 permutation (the 2-input instance).
#[derive(Debug, Default, Clone, Copy)]
pub struct Poseidon2;

impl Poseidon2 {
    /// Apply in place to a full 3-element state.
    #[inline]
    pub fn apply(state: &mut [Felt; POSEIDON2_WIDTH]) {
        apply_rounds(state, &constants::POSEIDON2, &mds::M3);
    }

    pub fn apply_with_trace(
        state: &mut [Felt; POSEIDON2_WIDTH],
    ) -> Vec<[Felt; POSEIDON2_WIDTH]> {
        apply_rounds_with_trace(state, &constants::POSEIDON2, &mds::M3)
    }
}

/// Stateless width-5 permutation (the 4-input instance).
#[derive(Debug, Default, Clone, Copy)]
pub struct Poseidon4;

impl Poseidon4 {
    /// Apply in place to a full 5-element state.
    #[inline]
    pub fn apply(state: &mut [Felt; POSEIDON4_WIDTH]) {
        apply_rounds(state, &constants::POSEIDON4, &mds::M5);
    }

    pub fn apply_with_trace(
        state: &mut [Felt; POSEIDON4_WIDTH],
    ) -> Vec<[Felt; POSEIDON4_WIDTH]> {
        apply_rounds_with_trace(state, &constants::POSEIDON4, &mds::M5)
    }
}

/// Width-generic access for the sponge wrapper.
pub trait Permutation {
    const WIDTH: usize;

    /// Apply to a state slice of exactly `WIDTH` elements.
    fn apply_slice(state: &mut [Felt]);
}

impl Permutation for Poseidon2 {
    const WIDTH: usize = POSEIDON2_WIDTH;
    fn apply_slice(state: &mut [Felt]) {
        let mut st = [Felt::ZERO; POSEIDON2_WIDTH];
        st.copy_from_slice(state);
        Self::apply(&mut st);
        state.copy_from_slice(&st);
    }
}

impl Permutation for Poseidon4 {
    const WIDTH: usize = POSEIDON4_WIDTH;
    fn apply_slice(state: &mut [Felt]) {
        let mut st = [Felt::ZERO; POSEIDON4_WIDTH];
        st.copy_from_slice(state);
        Self::apply(&mut st);
        state.copy_from_slice(&st);
    }
}

/// Raw access to the round schedule without sponge framing. The state
/// length selects the instance; anything other than 3 or 5 is an arity
/// error.
pub fn permutation(state: &[Felt]) -> Result<Vec<Felt>, PoseidonError> {
    match state.len() {
        POSEIDON2_WIDTH => {
            let mut st = [Felt::ZERO; POSEIDON2_WIDTH];
            st.copy_from_slice(state);
            Poseidon2::apply(&mut st);
            Ok(st.to_vec())
        }
        POSEIDON4_WIDTH => {
            let mut st = [Felt::ZERO; POSEIDON4_WIDTH];
            st.copy_from_slice(state);
            Poseidon4::apply(&mut st);
            Ok(st.to_vec())
        }
        n => Err(PoseidonError::InvalidArity { got: n }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_is_deterministic() {
        let state = [Felt::from(1u64), Felt::from(2u64), Felt::ZERO];
        let mut a = state;
        let mut b = state;
        Poseidon2::apply(&mut a);
        Poseidon2::apply(&mut b);
        assert_eq!(a, b);
        assert_ne!(a, state);
    }

    #[test]
    fn trace_covers_every_round() {
        let mut state = [Felt::ONE; POSEIDON2_WIDTH];
        let trace = Poseidon2::apply_with_trace(&mut state);
        assert_eq!(trace.len(), TOTAL_ROUNDS);
        assert_eq!(*trace.last().unwrap(), state);

        let mut wide = [Felt::ONE; POSEIDON4_WIDTH];
        let trace = Poseidon4::apply_with_trace(&mut wide);
        assert_eq!(trace.len(), TOTAL_ROUNDS);
        assert_eq!(*trace.last().unwrap(), wide);
    }

    #[test]
    fn slice_entry_matches_fixed_width() {
        let state = [Felt::from(7u64), Felt::from(8u64), Felt::from(9u64)];
        let via_slice = permutation(&state).unwrap();
        let mut direct = state;
        Poseidon2::apply(&mut direct);
        assert_eq!(via_slice, direct.to_vec());
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let state = vec![Felt::ZERO; 4];
        assert_eq!(
            permutation(&state).unwrap_err(),
            PoseidonError::InvalidArity { got: 4 }
        );
        assert!(permutation(&[]).is_err());
    }
}
