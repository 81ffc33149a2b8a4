use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrcError {
    #[error("unknown CRC algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("CRC width must be within 1..=128, got {0}")]
    InvalidWidth(u8),

    /// A parameter does not fit in `width` bits.
    #[error("{field} 0x{value:X} does not fit in {width} bits")]
    ValueTooWide {
        field: &'static str,
        value: u128,
        width: u8,
    },
}
