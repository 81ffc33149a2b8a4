//! Recovers unknown message bits so that a checksum hits a chosen value.
//!
//! Every CRC is XOR-linear in the message up to a constant, so flipping a
//! set of bits changes the checksum by the XOR of the single-bit deltas.
//! Choosing which unknown bits to set is then a subset-XOR problem over
//! those deltas, handed to [`gf2::SubsetXor`].
//!
//! ```
//! use cracker::solve_bits_named;
//!
//! let recovered = solve_bits_named(b"testes1\x00", &(56..64).collect::<Vec<_>>(), 0x2E5A, "CRC-HQX")
//!     .unwrap()
//!     .expect("reachable");
//! assert_eq!(recovered.message, b"testes12");
//! ```

pub mod error;
mod probe;
pub mod solve;

pub use error::CrackError;
pub use solve::{solve_bits, solve_bits_named, CrcCracker, Recovery};
