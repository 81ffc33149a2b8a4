//! Bit-serial CRC over arbitrary Rocksoft-style parameter sets.
//!
//! ```
//! use crc_engine::{compute, compute_named};
//!
//! let params = crc_engine::catalog::find("CRC-32").unwrap();
//! assert_eq!(compute(b"123456789", &params), 0xCBF43926);
//! assert_eq!(compute_named(b"123456789", "crc-16/xmodem").unwrap(), 0x31C3);
//! ```

pub mod catalog;
pub mod checksum;
pub mod engine;
pub mod error;
pub mod params;

pub use checksum::Checksum;
pub use engine::{compute, compute_named, reflect, CrcDigest};
pub use error::CrcError;
pub use params::CrcParams;

/// Known-answer input every catalogued `check` value is computed over.
pub const CHECK_INPUT: &[u8] = b"123456789";
