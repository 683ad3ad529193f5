// SPDX-License-Identifier: MIT
//! Permutation parameters: validated runtime configuration plus the
//! deterministic derivation procedure behind the embedded tables.
//!
//! The tables in [`crate::constants`] and [`crate::mds`] are the output of
//! an 80-bit Grain LFSR seeded with the instance description
//! `(field=1, sbox=0, n=255, t, R_F=8, R_P=56)`: after discarding 160
//! warm-up bits the stream is self-decimated (a gate bit selects whether
//! the following bit is emitted), round constants are drawn as 255-bit
//! integers with rejection sampling below p, and the MDS matrix is the
//! Cauchy matrix `M[i][j] = (x_i + y_j)^-1` over 2t further draws reduced
//! mod p. [`PoseidonParams::derive`] reruns the procedure so tests can
//! check the embedded data element-for-element.

use crate::error::PoseidonError;
use crate::field::{Felt, MODULUS_LIMBS};
use crate::{constants, mds, FULL_ROUNDS, PARTIAL_ROUNDS, POSEIDON2_WIDTH, POSEIDON4_WIDTH};
use tinyvec::ArrayVec;

/// Bit length of one constant draw (the modulus is 255 bits).
const FIELD_BITS: usize = 255;

/// The Grain LFSR used by the reference parameter generation.
///
/// State is 80 bits, oldest first; the feedback taps are positions
/// 62, 51, 38, 23, 13 and 0.
pub struct GrainLfsr {
    state: [bool; 80],
}

impl GrainLfsr {
    /// Seed from the instance description. Field widths of the packed
    /// header: 2 (field tag) + 4 (s-box tag) + 12 (field size) +
    /// 12 (width) + 10 (R_F) + 10 (R_P) + 30 set bits.
    pub fn new(width: usize, full_rounds: usize, partial_rounds: usize) -> Self {
        let mut state = [true; 80];
        let mut pos = 0;
        let mut push = |val: u64, bits: usize| {
            for i in (0..bits).rev() {
                state[pos] = (val >> i) & 1 == 1;
                pos += 1;
            }
        };
        push(1, 2); // prime field
        push(0, 4); // x^alpha s-box
        push(FIELD_BITS as u64, 12);
        push(width as u64, 12);
        push(full_rounds as u64, 10);
        push(partial_rounds as u64, 10);
        // remaining 30 bits stay set
        let mut lfsr = GrainLfsr { state };
        for _ in 0..160 {
            lfsr.next_raw();
        }
        lfsr
    }

    fn next_raw(&mut self) -> bool {
        let s = &self.state;
        let bit = s[62] ^ s[51] ^ s[38] ^ s[23] ^ s[13] ^ s[0];
        self.state.copy_within(1.., 0);
        self.state[79] = bit;
        bit
    }

    /// Self-decimated output: a gate bit decides whether the bit after it
    /// is emitted or dropped.
    pub fn next_bit(&mut self) -> bool {
        loop {
            let gate = self.next_raw();
            let value = self.next_raw();
            if gate {
                return value;
            }
        }
    }

    /// Draw 255 bits, most significant first, as little-endian limbs.
    fn next_candidate(&mut self) -> [u64; 4] {
        let mut limbs = [0u64; 4];
        for _ in 0..FIELD_BITS {
            // shift left by one across limbs
            let mut carry = 0u64;
            for limb in limbs.iter_mut() {
                let next_carry = *limb >> 63;
                *limb = (*limb << 1) | carry;
                carry = next_carry;
            }
            if self.next_bit() {
                limbs[0] |= 1;
            }
        }
        limbs
    }

    /// Next constant below p, by rejection sampling.
    pub fn next_constant(&mut self) -> Felt {
        loop {
            let limbs = self.next_candidate();
            if limbs_below_modulus(&limbs) {
                return Felt::from_u256_le(limbs);
            }
        }
    }

    /// Next draw reduced mod p (no rejection); used for the MDS points.
    pub fn next_reduced(&mut self) -> Felt {
        Felt::from_u256_le(self.next_candidate())
    }
}

fn limbs_below_modulus(limbs: &[u64; 4]) -> bool {
    for i in (0..4).rev() {
        if limbs[i] < MODULUS_LIMBS[i] {
            return true;
        }
        if limbs[i] > MODULUS_LIMBS[i] {
            return false;
        }
    }
    false
}

/// A complete, validated parameter set for one permutation instance.
///
/// Process-wide instances for the two shipped widths come from
/// [`PoseidonParams::width3`] and [`PoseidonParams::width5`]; arbitrary
/// sets go through [`PoseidonParams::new`], which fails fast on malformed
/// tables so per-call code never revalidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoseidonParams {
    pub width: usize,
    pub full_rounds: usize,
    pub partial_rounds: usize,
    /// Flat, round-major: round 0's `width` constants first.
    pub round_constants: Vec<Felt>,
    pub mds: Vec<Vec<Felt>>,
}

impl PoseidonParams {
    pub fn new(
        width: usize,
        full_rounds: usize,
        partial_rounds: usize,
        round_constants: Vec<Felt>,
        mds: Vec<Vec<Felt>>,
    ) -> Result<Self, PoseidonError> {
        let params = PoseidonParams {
            width,
            full_rounds,
            partial_rounds,
            round_constants,
            mds,
        };
        params.validate()?;
        Ok(params)
    }

    /// The embedded width-3 instance (8 full + 56 partial rounds).
    pub fn width3() -> Self {
        PoseidonParams {
            width: POSEIDON2_WIDTH,
            full_rounds: FULL_ROUNDS,
            partial_rounds: PARTIAL_ROUNDS,
            round_constants: constants::POSEIDON2.iter().flatten().copied().collect(),
            mds: mds::M3.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// The embedded width-5 instance (8 full + 56 partial rounds).
    pub fn width5() -> Self {
        PoseidonParams {
            width: POSEIDON4_WIDTH,
            full_rounds: FULL_ROUNDS,
            partial_rounds: PARTIAL_ROUNDS,
            round_constants: constants::POSEIDON4.iter().flatten().copied().collect(),
            mds: mds::M5.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Rerun the Grain derivation for the given width with the shipped
    /// round counts. Must reproduce the embedded tables exactly.
    pub fn derive(width: usize) -> Result<Self, PoseidonError> {
        if width < 2 {
            return Err(PoseidonError::InvalidConfig(format!(
                "width {width} leaves no input slots"
            )));
        }
        let mut lfsr = GrainLfsr::new(width, FULL_ROUNDS, PARTIAL_ROUNDS);

        let mut round_constants: ArrayVec<[Felt; 512]> = ArrayVec::new();
        for _ in 0..width * (FULL_ROUNDS + PARTIAL_ROUNDS) {
            round_constants.push(lfsr.next_constant());
        }

        // 2t distinct Cauchy points; on a (vanishingly unlikely) collision
        // the whole batch is redrawn, as the reference does.
        let points = loop {
            let pts: Vec<Felt> = (0..2 * width).map(|_| lfsr.next_reduced()).collect();
            let distinct = pts
                .iter()
                .enumerate()
                .all(|(i, a)| pts[..i].iter().all(|b| a != b));
            if distinct {
                break pts;
            }
        };
        let (xs, ys) = points.split_at(width);
        let mut mds = Vec::with_capacity(width);
        for x in xs {
            let mut row = Vec::with_capacity(width);
            for y in ys {
                let entry = (*x + *y).invert().ok_or_else(|| {
                    PoseidonError::InvalidConfig("Cauchy points sum to zero".to_string())
                })?;
                row.push(entry);
            }
            mds.push(row);
        }

        Self::new(
            width,
            FULL_ROUNDS,
            PARTIAL_ROUNDS,
            round_constants.to_vec(),
            mds,
        )
    }

    pub fn total_rounds(&self) -> usize {
        self.full_rounds + self.partial_rounds
    }

    /// The `width` constants consumed by the given round.
    pub fn constants_for_round(&self, round: usize) -> &[Felt] {
        &self.round_constants[round * self.width..(round + 1) * self.width]
    }

    fn validate(&self) -> Result<(), PoseidonError> {
        if self.width < 2 {
            return Err(PoseidonError::InvalidConfig(format!(
                "width {} leaves no input slots",
                self.width
            )));
        }
        if self.full_rounds == 0 || self.full_rounds % 2 != 0 {
            return Err(PoseidonError::InvalidConfig(format!(
                "full round count {} cannot be split around the partial block",
                self.full_rounds
            )));
        }
        let expected = self.width * self.total_rounds();
        if self.round_constants.len() != expected {
            return Err(PoseidonError::InvalidConfig(format!(
                "round constant table has {} entries, schedule consumes {expected}",
                self.round_constants.len()
            )));
        }
        if self.mds.len() != self.width || self.mds.iter().any(|row| row.len() != self.width) {
            return Err(PoseidonError::InvalidConfig(format!(
                "mixing matrix is not {0}x{0}",
                self.width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_reproduces_embedded_width3_tables() {
        let derived = PoseidonParams::derive(POSEIDON2_WIDTH).unwrap();
        assert_eq!(derived, PoseidonParams::width3());
    }

    #[test]
    fn derivation_reproduces_embedded_width5_tables() {
        let derived = PoseidonParams::derive(POSEIDON4_WIDTH).unwrap();
        assert_eq!(derived, PoseidonParams::width5());
    }

    #[test]
    fn embedded_params_are_idempotent() {
        assert_eq!(PoseidonParams::width3(), PoseidonParams::width3());
        assert_eq!(PoseidonParams::width5(), PoseidonParams::width5());
    }

    #[test]
    fn constant_count_matches_round_schedule() {
        let p3 = PoseidonParams::width3();
        assert_eq!(p3.round_constants.len(), 3 * (8 + 56));
        let p5 = PoseidonParams::width5();
        assert_eq!(p5.round_constants.len(), 5 * (8 + 56));
    }

    #[test]
    fn truncated_constant_table_is_rejected() {
        let mut p = PoseidonParams::width3();
        p.round_constants.pop();
        let err = PoseidonParams::new(
            p.width,
            p.full_rounds,
            p.partial_rounds,
            p.round_constants,
            p.mds,
        )
        .unwrap_err();
        assert!(matches!(err, PoseidonError::InvalidConfig(_)));
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let mut p = PoseidonParams::width3();
        p.mds[1].pop();
        let err = PoseidonParams::new(
            p.width,
            p.full_rounds,
            p.partial_rounds,
            p.round_constants,
            p.mds,
        )
        .unwrap_err();
        assert!(matches!(err, PoseidonError::InvalidConfig(_)));
    }

    #[test]
    fn odd_full_round_count_is_rejected() {
        let p = PoseidonParams::width3();
        let err = PoseidonParams::new(p.width, 7, p.partial_rounds, p.round_constants, p.mds)
            .unwrap_err();
        assert!(matches!(err, PoseidonError::InvalidConfig(_)));
    }
}
