// SPDX-License-Identifier: MIT
//! Error type shared by the fallible crate boundaries.
//!
//! The permutation itself is pure and total; errors only arise at the
//! edges: strict decoding, raw-state entry points, and configuration
//! loading. Nothing in this crate retries: the computation is
//! deterministic, so callers surface errors directly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseidonError {
    /// A strict decoder was handed a value outside `[0, p)`.
    ///
    /// The reducing constructors (`Felt::from_u256_le` and the `*_u256`
    /// hash wrappers) never raise this; they fold the input mod p instead.
    #[error("not a canonical field element: {0}")]
    InvalidFieldElement(String),

    /// `permutation` was called with a state length that is neither
    /// supported width (3 or 5).
    #[error("state of length {got} does not match a supported permutation width (3 or 5)")]
    InvalidArity { got: usize },

    /// A parameter set failed validation at construction time. This is
    /// always an initialization failure, never a per-call condition.
    #[error("invalid permutation configuration: {0}")]
    InvalidConfig(String),
}
