//! Subset-XOR: which of a list of bit-vectors XOR to a target?

pub mod independent;
pub mod selector;
pub mod solver;

pub use independent::independent_subset;
pub use selector::Selector;
pub use solver::{solve, SubsetXor};

use num_bigint::BigUint;

/// Widest bit-length among `inputs`, 0 when empty.
pub(crate) fn bit_width(inputs: &[BigUint]) -> usize {
    inputs.iter().map(|x| x.bits() as usize).max().unwrap_or(0)
}
