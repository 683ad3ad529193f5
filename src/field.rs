// SPDX-License-Identifier: MIT
//! BLS12-381 scalar field element.
//!
//! Thin newtype over [`bls12_381::Scalar`], which already provides
//! constant-time Montgomery arithmetic; products never overflow because
//! reduction happens inside every multiply. The wrapper adds the two
//! construction policies the hash boundary needs (strict decoding vs.
//! implicit reduction) and the quintic S-box.

use crate::error::PoseidonError;
use bls12_381::Scalar;
use ff::Field;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Canonical little-endian limbs of the field modulus
/// `0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001`.
pub const MODULUS_LIMBS: [u64; 4] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

/// A field element in `[0, p)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Felt(Scalar);

impl Felt {
    pub const ZERO: Felt = Felt(Scalar::ZERO);
    pub const ONE: Felt = Felt(Scalar::ONE);

    /// Interpret four little-endian limbs as an unsigned 256-bit integer
    /// and reduce it mod p. This is the implicit-reduction entry point
    /// used by all integer-accepting hash wrappers.
    pub fn from_u256_le(limbs: [u64; 4]) -> Felt {
        Felt(Scalar::from_raw(limbs))
    }

    /// Strict decode of a canonical 32-byte little-endian encoding.
    /// Values `>= p` are rejected rather than reduced.
    pub fn from_bytes_le(bytes: &[u8; 32]) -> Result<Felt, PoseidonError> {
        let scalar = Scalar::from_bytes(bytes);
        if scalar.is_some().into() {
            Ok(Felt(scalar.unwrap()))
        } else {
            Err(PoseidonError::InvalidFieldElement(hex::encode(bytes)))
        }
    }

    /// Strict decode of a 64-character little-endian hex string.
    pub fn from_hex(hex_str: &str) -> Result<Felt, PoseidonError> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| PoseidonError::InvalidFieldElement(hex_str.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| PoseidonError::InvalidFieldElement(hex_str.to_string()))?;
        Self::from_bytes_le(&arr)
    }

    /// Canonical 32-byte little-endian encoding.
    pub fn to_bytes_le(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Canonical value as four little-endian limbs.
    pub fn to_u256_le(&self) -> [u64; 4] {
        let bytes = self.to_bytes_le();
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            limbs[i] = u64::from_le_bytes(chunk.try_into().unwrap());
        }
        limbs
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes_le())
    }

    /// The S-box `x -> x^5`, computed as x² → x⁴ → x⁵ (two squarings then
    /// a multiply by the original). The reference implementation reduces
    /// in exactly this order; a generic exponentiation must not be
    /// substituted.
    #[inline(always)]
    pub fn quintic(&self) -> Felt {
        let x2 = self.0.square();
        let x4 = x2.square();
        Felt(x4 * self.0)
    }

    pub fn square(&self) -> Felt {
        Felt(self.0.square())
    }

    /// Multiplicative inverse; `None` for zero.
    pub fn invert(&self) -> Option<Felt> {
        let inv = self.0.invert();
        if inv.is_some().into() {
            Some(Felt(inv.unwrap()))
        } else {
            None
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Scalar::ZERO
    }

    /// Canonical decimal representation, via repeated division of the
    /// 256-bit value by 10.
    pub fn to_decimal(&self) -> String {
        let mut limbs = self.to_u256_le();
        if limbs == [0, 0, 0, 0] {
            return "0".to_string();
        }
        let mut digits = String::new();
        while limbs != [0, 0, 0, 0] {
            digits.push((b'0' + div_by_10(&mut limbs)) as char);
        }
        digits.chars().rev().collect()
    }
}

/// Divide a 256-bit number (little-endian limbs) by 10 in place,
/// returning the remainder.
fn div_by_10(limbs: &mut [u64; 4]) -> u8 {
    let mut carry: u128 = 0;
    for limb in limbs.iter_mut().rev() {
        let cur = (carry << 64) + *limb as u128;
        *limb = (cur / 10) as u64;
        carry = cur % 10;
    }
    carry as u8
}

impl Default for Felt {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Felt {
    fn from(val: u64) -> Self {
        Felt(Scalar::from(val))
    }
}

impl Add for Felt {
    type Output = Felt;
    fn add(self, rhs: Felt) -> Felt {
        Felt(self.0 + rhs.0)
    }
}

impl AddAssign for Felt {
    fn add_assign(&mut self, rhs: Felt) {
        self.0 += rhs.0;
    }
}

impl Sub for Felt {
    type Output = Felt;
    fn sub(self, rhs: Felt) -> Felt {
        Felt(self.0 - rhs.0)
    }
}

impl SubAssign for Felt {
    fn sub_assign(&mut self, rhs: Felt) {
        self.0 -= rhs.0;
    }
}

impl Mul for Felt {
    type Output = Felt;
    fn mul(self, rhs: Felt) -> Felt {
        Felt(self.0 * rhs.0)
    }
}

impl MulAssign for Felt {
    fn mul_assign(&mut self, rhs: Felt) {
        self.0 *= rhs.0;
    }
}

impl Neg for Felt {
    type Output = Felt;
    fn neg(self) -> Felt {
        Felt(-self.0)
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Felt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Felt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Felt, D::Error> {
        let s = String::deserialize(deserializer)?;
        Felt::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_one_encodings() {
        assert_eq!(
            Felt::ZERO.to_hex(),
            "0000000000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            Felt::ONE.to_hex(),
            "0100000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn quintic_matches_repeated_multiplication() {
        let x = Felt::from(12345u64);
        let naive = x * x * x * x * x;
        assert_eq!(x.quintic(), naive);
    }

    #[test]
    fn from_u256_reduces_mod_p() {
        // p + 5 folds to 5
        let mut limbs = MODULUS_LIMBS;
        limbs[0] = limbs[0].wrapping_add(5);
        assert_eq!(Felt::from_u256_le(limbs), Felt::from(5u64));
    }

    #[test]
    fn strict_decode_rejects_modulus() {
        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&MODULUS_LIMBS[i].to_le_bytes());
        }
        assert!(matches!(
            Felt::from_bytes_le(&bytes),
            Err(PoseidonError::InvalidFieldElement(_))
        ));
        // p - 1 is canonical
        bytes[0] = 0;
        assert!(Felt::from_bytes_le(&bytes).is_ok());
    }

    #[test]
    fn bytes_roundtrip() {
        let x = Felt::from(0xdead_beef_u64);
        assert_eq!(Felt::from_bytes_le(&x.to_bytes_le()).unwrap(), x);
        assert_eq!(Felt::from_hex(&x.to_hex()).unwrap(), x);
    }

    #[test]
    fn decimal_display() {
        assert_eq!(Felt::ZERO.to_string(), "0");
        assert_eq!(Felt::from(42u64).to_string(), "42");
        let p_minus_1 = -Felt::ONE;
        assert_eq!(
            p_minus_1.to_string(),
            "52435875175126190479447740508185965837690552500527637822603658699938581184512"
        );
    }
}
