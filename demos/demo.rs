// SPDX-License-Identifier: MIT
//! Simple CLI demo.
//!
//! `$ cargo run --release --example demo 1 2 3`
//!
//! Hashes the given integers (decimal, reduced mod p) with the
//! variable-length entry point and prints the digest.

use poseidon_bls12381::{hash, Felt};
use std::env;

fn main() {
    let inputs: Vec<Felt> = env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<u64>()
                .map(Felt::from)
                .unwrap_or_else(|_| panic!("not an unsigned integer: {arg}"))
        })
        .collect();

    if inputs.is_empty() {
        eprintln!("usage: demo <int> [<int> ...]");
        std::process::exit(1);
    }

    let digest = hash(&inputs);
    println!("digest (dec): {digest}");
    println!("digest (hex): {}", digest.to_hex());
}
