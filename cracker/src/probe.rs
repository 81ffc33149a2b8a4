use bitvec::prelude::*;
use crc_engine::Checksum;
use log::trace;
use num_bigint::BigUint;
use rayon::prelude::*;

use crate::error::CrackError;

pub(crate) fn check_positions(message: &[u8], positions: &[usize]) -> Result<(), CrackError> {
    let bits = message.len() * 8;
    match positions.iter().find(|&&p| p >= bits) {
        Some(&position) => Err(CrackError::PositionOutOfRange { position, bits }),
        None => Ok(()),
    }
}

/// Copy of `message` with every listed bit cleared. Bit `p` is bit
/// `7 - p % 8` of byte `p / 8`.
pub(crate) fn cleared(message: &[u8], positions: &[usize]) -> Vec<u8> {
    let mut buffer = message.to_vec();
    let bits = buffer.view_bits_mut::<Msb0>();
    for &p in positions {
        bits.set(p, false);
    }
    buffer
}

pub(crate) fn set_bits(buffer: &mut [u8], positions: &[usize]) {
    let bits = buffer.view_bits_mut::<Msb0>();
    for &p in positions {
        bits.set(p, true);
    }
}

fn delta<C: Checksum + ?Sized>(checksum: &C, buffer: &mut [u8], baseline: u128, position: usize) -> BigUint {
    buffer.view_bits_mut::<Msb0>().set(position, true);
    let delta = baseline ^ checksum.checksum(buffer);
    buffer.view_bits_mut::<Msb0>().set(position, false);
    trace!("probe bit {}: delta 0x{:X}", position, delta);
    BigUint::from(delta)
}

/// Checksum change caused by setting each unknown bit of `zeroed` alone.
/// Every unknown must already be clear in `zeroed`.
pub(crate) fn deltas<C: Checksum + ?Sized>(
    checksum: &C,
    zeroed: &[u8],
    baseline: u128,
    unknowns: &[usize],
) -> Vec<BigUint> {
    let mut buffer = zeroed.to_vec();
    unknowns
        .iter()
        .map(|&p| delta(checksum, &mut buffer, baseline, p))
        .collect()
}

/// Same as [`deltas`], one scratch buffer per rayon worker.
pub(crate) fn deltas_parallel<C: Checksum + Sync + ?Sized>(
    checksum: &C,
    zeroed: &[u8],
    baseline: u128,
    unknowns: &[usize],
) -> Vec<BigUint> {
    unknowns
        .par_iter()
        .map_init(|| zeroed.to_vec(), |buffer, &p| delta(checksum, buffer, baseline, p))
        .collect()
}
