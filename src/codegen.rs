// SPDX-License-Identifier: MIT
//! Unrolled-code generator.
//!
//! A pure, offline source-to-source transform: given a validated
//! [`PoseidonParams`], [`Program::unroll`] flattens the entire round
//! schedule into a branch-free sequence of primitive field operations
//! with every round constant and matrix entry inlined as a literal;
//! nothing is looked up through a table at execution time. The program
//! can be rendered as Rust source ([`Program::to_rust`]), serialized as
//! JSON for other consumers, or interpreted ([`Program::eval`]) to prove
//! it computes exactly what the loop-based core computes.
//!
//! This runs whenever parameters change, never on the per-call path. In
//! environments without a per-operation cost model the unrolling is a
//! discretionary optimization (the compiler often gets there on its own),
//! but the emitted code's numeric behavior always matches the core.

use crate::error::PoseidonError;
use crate::field::Felt;
use crate::params::PoseidonParams;
use serde::{Deserialize, Serialize};

/// One primitive step over the register model: `width` state registers,
/// `width` accumulators for the matrix product, one scratch register for
/// the S-box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instr {
    /// scratch = state[slot]
    Save { slot: usize },
    /// state[slot] = state[slot] + c
    AddConst { slot: usize, c: Felt },
    /// state[slot] = state[slot] * state[slot]
    Square { slot: usize },
    /// state[slot] = state[slot] * scratch
    MulSaved { slot: usize },
    /// acc[row] = c * state[slot]
    MulConst { row: usize, slot: usize, c: Felt },
    /// acc[row] = acc[row] + c * state[slot]
    MulAddConst { row: usize, slot: usize, c: Felt },
    /// state = acc
    Flush,
}

/// A fully unrolled permutation: the flat instruction list plus the width
/// it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub width: usize,
    pub ops: Vec<Instr>,
}

impl Program {
    /// Flatten the round schedule of `params` into straight-line code.
    pub fn unroll(params: &PoseidonParams) -> Program {
        let t = params.width;
        let half_full = params.full_rounds / 2;
        let mut ops = Vec::new();

        let mut emit_round = |round: usize, boxed_slots: usize| {
            let rc = params.constants_for_round(round);
            for (slot, c) in rc.iter().enumerate() {
                ops.push(Instr::AddConst { slot, c: *c });
            }
            for slot in 0..boxed_slots {
                ops.push(Instr::Save { slot });
                ops.push(Instr::Square { slot });
                ops.push(Instr::Square { slot });
                ops.push(Instr::MulSaved { slot });
            }
            for row in 0..t {
                ops.push(Instr::MulConst {
                    row,
                    slot: 0,
                    c: params.mds[row][0],
                });
                for slot in 1..t {
                    ops.push(Instr::MulAddConst {
                        row,
                        slot,
                        c: params.mds[row][slot],
                    });
                }
            }
            ops.push(Instr::Flush);
        };

        let mut round = 0;
        for _ in 0..half_full {
            emit_round(round, t);
            round += 1;
        }
        for _ in 0..params.partial_rounds {
            emit_round(round, 1);
            round += 1;
        }
        for _ in 0..half_full {
            emit_round(round, t);
            round += 1;
        }

        Program { width: t, ops }
    }

    /// Straight-line interpretation of the program. Exists so tests can
    /// show the unrolled sequence and the loop-based core are the same
    /// function.
    pub fn eval(&self, input: &[Felt]) -> Result<Vec<Felt>, PoseidonError> {
        if input.len() != self.width {
            return Err(PoseidonError::InvalidArity { got: input.len() });
        }
        let mut state = input.to_vec();
        let mut acc = vec![Felt::ZERO; self.width];
        let mut scratch = Felt::ZERO;
        for op in &self.ops {
            match *op {
                Instr::Save { slot } => scratch = state[slot],
                Instr::AddConst { slot, c } => state[slot] += c,
                Instr::Square { slot } => {
                    let x = state[slot];
                    state[slot] = x * x;
                }
                Instr::MulSaved { slot } => state[slot] *= scratch,
                Instr::MulConst { row, slot, c } => acc[row] = c * state[slot],
                Instr::MulAddConst { row, slot, c } => acc[row] += c * state[slot],
                Instr::Flush => state.copy_from_slice(&acc),
            }
        }
        Ok(state)
    }

    /// Count of (field additions, field multiplications) in the program.
    /// Register moves are not field operations and are excluded.
    pub fn op_counts(&self) -> (usize, usize) {
        let mut adds = 0;
        let mut muls = 0;
        for op in &self.ops {
            match op {
                Instr::AddConst { .. } => adds += 1,
                Instr::Square { .. } | Instr::MulSaved { .. } | Instr::MulConst { .. } => muls += 1,
                Instr::MulAddConst { .. } => {
                    adds += 1;
                    muls += 1;
                }
                Instr::Save { .. } | Instr::Flush => {}
            }
        }
        (adds, muls)
    }

    /// Render the program as a free-standing Rust function over the
    /// crate's field type. Straight-line: no loops, no table lookups,
    /// every constant a literal.
    pub fn to_rust(&self, fn_name: &str) -> String {
        let t = self.width;
        let mut out = String::new();
        out.push_str(&format!(
            "pub fn {fn_name}(state: &mut [Felt; {t}]) {{\n"
        ));
        for i in 0..t {
            out.push_str(&format!("    let mut s{i} = state[{i}];\n"));
        }
        for op in &self.ops {
            match *op {
                Instr::Save { slot } => {
                    out.push_str(&format!("    let sv = s{slot};\n"));
                }
                Instr::AddConst { slot, c } => {
                    out.push_str(&format!("    s{slot} += {};\n", felt_literal(&c)));
                }
                Instr::Square { slot } => {
                    out.push_str(&format!("    s{slot} = s{slot} * s{slot};\n"));
                }
                Instr::MulSaved { slot } => {
                    out.push_str(&format!("    s{slot} *= sv;\n"));
                }
                Instr::MulConst { row, slot, c } => {
                    out.push_str(&format!(
                        "    let mut a{row} = {} * s{slot};\n",
                        felt_literal(&c)
                    ));
                }
                Instr::MulAddConst { row, slot, c } => {
                    out.push_str(&format!(
                        "    a{row} += {} * s{slot};\n",
                        felt_literal(&c)
                    ));
                }
                Instr::Flush => {
                    for i in 0..t {
                        out.push_str(&format!("    s{i} = a{i};\n"));
                    }
                }
            }
        }
        for i in 0..t {
            out.push_str(&format!("    state[{i}] = s{i};\n"));
        }
        out.push_str("}\n");
        out
    }
}

fn felt_literal(c: &Felt) -> String {
    let limbs = c.to_u256_le();
    format!(
        "Felt::from_u256_le([{:#018x}, {:#018x}, {:#018x}, {:#018x}])",
        limbs[0], limbs[1], limbs[2], limbs[3]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::{Poseidon2, Poseidon4};

    #[test]
    fn unrolled_width3_matches_loop_core() {
        let program = Program::unroll(&PoseidonParams::width3());
        for seed in 0u64..8 {
            let input = [
                Felt::from(seed),
                Felt::from(seed * 31 + 7),
                Felt::from(seed * 1009),
            ];
            let mut expected = input;
            Poseidon2::apply(&mut expected);
            assert_eq!(program.eval(&input).unwrap(), expected.to_vec());
        }
    }

    #[test]
    fn unrolled_width5_matches_loop_core() {
        let program = Program::unroll(&PoseidonParams::width5());
        let input: Vec<Felt> = (10u64..15).map(Felt::from).collect();
        let mut expected = [Felt::ZERO; 5];
        expected.copy_from_slice(&input);
        Poseidon4::apply(&mut expected);
        assert_eq!(program.eval(&input).unwrap(), expected.to_vec());
    }

    #[test]
    fn operation_counts_are_closed_form() {
        // Per round: t constant adds + t(t-1) accumulating adds; t^2
        // matrix muls + 3 muls per S-boxed slot.
        let p3 = Program::unroll(&PoseidonParams::width3());
        let (adds, muls) = p3.op_counts();
        assert_eq!(adds, 64 * (3 + 3 * 2));
        assert_eq!(muls, 8 * (9 + 9) + 56 * (9 + 3));

        let p5 = Program::unroll(&PoseidonParams::width5());
        let (adds, muls) = p5.op_counts();
        assert_eq!(adds, 64 * (5 + 5 * 4));
        assert_eq!(muls, 8 * (25 + 15) + 56 * (25 + 3));
    }

    #[test]
    fn rendered_source_is_branch_free() {
        let program = Program::unroll(&PoseidonParams::width3());
        let src = program.to_rust("poseidon2_unrolled");
        assert!(src.starts_with("pub fn poseidon2_unrolled"));
        for keyword in ["for ", "while ", "loop ", "if ", "match "] {
            assert!(!src.contains(keyword), "emitted `{keyword}`");
        }
        // every constant inlined: one literal per add/mul-const op
        let literals = src.matches("Felt::from_u256_le").count();
        assert_eq!(literals, 64 * 3 + 64 * 9);
    }

    #[test]
    fn eval_rejects_wrong_arity() {
        let program = Program::unroll(&PoseidonParams::width3());
        assert_eq!(
            program.eval(&[Felt::ZERO; 4]).unwrap_err(),
            PoseidonError::InvalidArity { got: 4 }
        );
    }

    #[test]
    fn program_json_roundtrip() {
        let program = Program::unroll(&PoseidonParams::width3());
        let json = serde_json::to_string(&program).unwrap();
        let back: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(back, program);
    }
}
