use crc_engine::CrcError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrackError {
    #[error("bit position {position} is outside the {bits}-bit message")]
    PositionOutOfRange { position: usize, bits: usize },

    #[error(transparent)]
    Crc(#[from] CrcError),
}
