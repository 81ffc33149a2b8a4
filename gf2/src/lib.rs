//! Linear algebra over GF(2).
//!
//! Rows are bit-vectors stored as one [`BigUint`](num_bigint::BigUint) each,
//! with column 0 as the most significant bit.

pub mod error;
pub mod matrix;
pub mod subset_xor;

pub use error::MatrixError;
pub use matrix::BitMatrix;
pub use subset_xor::{independent_subset, solve, Selector, SubsetXor};
