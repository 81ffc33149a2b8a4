use crate::engine::compute;
use crate::params::CrcParams;

/// Any checksum over a byte string.
///
/// Bit recovery is only sound for functions that are XOR-linear in the
/// message up to a constant, which holds for every CRC.
pub trait Checksum {
    fn checksum(&self, data: &[u8]) -> u128;
}

impl Checksum for CrcParams {
    fn checksum(&self, data: &[u8]) -> u128 {
        compute(data, self)
    }
}

impl<F> Checksum for F
where
    F: Fn(&[u8]) -> u128,
{
    fn checksum(&self, data: &[u8]) -> u128 {
        self(data)
    }
}
