use std::fmt;

use crc_engine::{catalog, Checksum, CrcParams};
use gf2::SubsetXor;
use log::{debug, info};
use num_bigint::BigUint;

use crate::error::CrackError;
use crate::probe;

/// A message that reaches the desired checksum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovery {
    pub message: Vec<u8>,
    /// Unknown positions that were set to 1, in the order they were given.
    pub set_bits: Vec<usize>,
}

type DeltaFn<C> = fn(&C, &[u8], u128, &[usize]) -> Vec<BigUint>;

/// Bit recovery against one checksum function.
///
/// Probing is sequential unless [`parallel`](Self::parallel) is enabled,
/// which needs a `Sync` checksum. Both paths produce the same deltas in the
/// same order, so the recovered message does not depend on the setting.
#[derive(Clone)]
pub struct CrcCracker<C> {
    checksum: C,
    parallel: bool,
    deltas: DeltaFn<C>,
}

impl<C: Checksum> CrcCracker<C> {
    pub fn new(checksum: C) -> Self {
        Self {
            checksum,
            parallel: false,
            deltas: probe::deltas::<C>,
        }
    }

    pub fn checksum(&self) -> &C {
        &self.checksum
    }

    /// Sets a subset of the `unknowns` bits of `message` (all cleared
    /// first) so that its checksum equals `desired`. `Ok(None)` means no
    /// such subset exists.
    pub fn solve_bits(
        &self,
        message: &[u8],
        unknowns: &[usize],
        desired: u128,
    ) -> Result<Option<Recovery>, CrackError> {
        crack(&self.checksum, message, unknowns, desired, self.parallel, self.deltas)
    }
}

impl<C: Checksum + Sync> CrcCracker<C> {
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self.deltas = if parallel {
            probe::deltas_parallel::<C>
        } else {
            probe::deltas::<C>
        };
        self
    }
}

impl CrcCracker<CrcParams> {
    /// Cracker for a catalogued CRC.
    pub fn named(name: &str) -> Result<Self, CrackError> {
        Ok(Self::new(catalog::find(name)?))
    }
}

impl<C: fmt::Debug> fmt::Debug for CrcCracker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrcCracker")
            .field("checksum", &self.checksum)
            .field("parallel", &self.parallel)
            .finish()
    }
}

/// One-shot sequential recovery with any [`Checksum`], e.g. a catalogue
/// entry or a closure over a checksum the catalogue lacks.
pub fn solve_bits<C: Checksum + ?Sized>(
    message: &[u8],
    unknowns: &[usize],
    desired: u128,
    checksum: &C,
) -> Result<Option<Recovery>, CrackError> {
    crack(checksum, message, unknowns, desired, false, probe::deltas::<C>)
}

/// [`solve_bits`] with a catalogued CRC name.
pub fn solve_bits_named(
    message: &[u8],
    unknowns: &[usize],
    desired: u128,
    name: &str,
) -> Result<Option<Recovery>, CrackError> {
    let params = catalog::find(name)?;
    solve_bits(message, unknowns, desired, &params)
}

fn crack<C, F>(
    checksum: &C,
    message: &[u8],
    unknowns: &[usize],
    desired: u128,
    parallel: bool,
    deltas: F,
) -> Result<Option<Recovery>, CrackError>
where
    C: Checksum + ?Sized,
    F: FnOnce(&C, &[u8], u128, &[usize]) -> Vec<BigUint>,
{
    probe::check_positions(message, unknowns)?;
    let zeroed = probe::cleared(message, unknowns);
    let baseline = checksum.checksum(&zeroed);
    debug!(
        "probing {} unknown bits of a {}-byte message{}",
        unknowns.len(),
        message.len(),
        if parallel { " in parallel" } else { "" }
    );

    let deltas = deltas(checksum, &zeroed, baseline, unknowns);
    Ok(recover(zeroed, baseline, unknowns, desired, &deltas))
}

fn recover(
    mut message: Vec<u8>,
    baseline: u128,
    unknowns: &[usize],
    desired: u128,
    deltas: &[BigUint],
) -> Option<Recovery> {
    let target = BigUint::from(baseline ^ desired);
    let Some(selector) = SubsetXor::new(deltas).solve(&target) else {
        info!("checksum 0x{:X} is unreachable through {} unknown bits", desired, unknowns.len());
        return None;
    };

    let set_bits: Vec<usize> = selector.selected_indices().map(|i| unknowns[i]).collect();
    probe::set_bits(&mut message, &set_bits);
    info!("reached checksum 0x{:X} by setting {} of {} unknown bits", desired, set_bits.len(), unknowns.len());

    Some(Recovery { message, set_bits })
}
