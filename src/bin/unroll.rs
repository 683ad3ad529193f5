// SPDX-License-Identifier: MIT
//! Offline unroller: prints a loop-free realization of the permutation.
//!
//! `$ cargo run --release --bin unroll -- --width 3 --format rust`
//!
//! Rerun whenever the parameter tables change; the output is a one-shot
//! artifact, not part of the per-call execution path.

use poseidon_bls12381::codegen::Program;
use poseidon_bls12381::PoseidonParams;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut width = 3usize;
    let mut format = String::from("rust");

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => {
                width = args
                    .next()
                    .ok_or("--width needs a value")?
                    .parse()?;
            }
            "--format" => {
                format = args.next().ok_or("--format needs a value")?;
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    let params = match width {
        3 => PoseidonParams::width3(),
        5 => PoseidonParams::width5(),
        _ => return Err(format!("unsupported width {width} (expected 3 or 5)").into()),
    };
    let program = Program::unroll(&params);

    match format.as_str() {
        "rust" => {
            let name = if width == 3 {
                "poseidon2_unrolled"
            } else {
                "poseidon4_unrolled"
            };
            print!("{}", program.to_rust(name));
        }
        "json" => println!("{}", serde_json::to_string_pretty(&program)?),
        other => return Err(format!("unknown format: {other} (rust|json)").into()),
    }

    let (adds, muls) = program.op_counts();
    eprintln!(
        "// width {width}: {} instructions, {adds} additions, {muls} multiplications",
        program.ops.len()
    );

    Ok(())
}
