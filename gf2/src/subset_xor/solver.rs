use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::matrix::BitMatrix;

use super::{bit_width, independent_subset, Selector};

/// Subset-XOR solver prepared once for a fixed list of inputs.
///
/// Construction picks an independent subset of the inputs, reduces it to
/// echelon form and records which combination of chosen inputs produced
/// each pivot row. Every [`solve`](Self::solve) call afterwards only XORs
/// recorded combinations together.
#[derive(Clone, Debug)]
pub struct SubsetXor {
    inputs: Vec<BigUint>,
    width: usize,
    chosen_idxs: Vec<usize>,
    record: BitMatrix,
    // pivot bit of each echelon row, e.g. 15 = "row toggles bit 15"
    pivots: Vec<u64>,
}

impl SubsetXor {
    pub fn new(inputs: &[BigUint]) -> Self {
        let width = bit_width(inputs);
        let chosen_idxs: Vec<usize> = independent_subset(inputs).selected_indices().collect();
        let chosen: Vec<BigUint> = chosen_idxs.iter().map(|&i| inputs[i].clone()).collect();

        let mut record = BitMatrix::identity(chosen.len());
        let mut echelon = BitMatrix::from_rows_unchecked(width, chosen);
        let rank = echelon.eliminate(Some(&mut record));
        debug_assert_eq!(rank, chosen_idxs.len());

        let pivots = echelon.rows[..rank]
            .iter()
            .map(|row| row.bits() - 1)
            .collect();

        debug!(
            "subset-xor: {} inputs, {} independent, width {}",
            inputs.len(),
            rank,
            width
        );

        Self {
            inputs: inputs.to_vec(),
            width,
            chosen_idxs,
            record,
            pivots,
        }
    }

    /// Dimension of the space spanned by the inputs.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn inputs(&self) -> &[BigUint] {
        &self.inputs
    }

    /// Selector over all inputs whose XOR is `target`, or `None` when
    /// `target` lies outside their span.
    pub fn solve(&self, target: &BigUint) -> Option<Selector> {
        if target.bits() > self.width as u64 {
            debug!(
                "subset-xor: target is {} bits wide, inputs only {}",
                target.bits(),
                self.width
            );
            return None;
        }

        let mut combination = BigUint::zero();
        for (row, &pivot) in self.pivots.iter().enumerate() {
            if target.bit(pivot) {
                combination ^= &self.record.rows[row];
            }
        }
        trace!("subset-xor: combination over chosen inputs 0x{:X}", combination);

        let k = self.chosen_idxs.len();
        let mut flags = vec![false; self.inputs.len()];
        for (i, &idx) in self.chosen_idxs.iter().enumerate() {
            if combination.bit((k - 1 - i) as u64) {
                flags[idx] = true;
            }
        }
        let selector = Selector::from(flags);

        // The width check above cannot rule out targets outside the span.
        if selector.combine(&self.inputs) != *target {
            debug!("subset-xor: target 0x{:X} is outside the span", target);
            return None;
        }

        Some(selector)
    }
}

/// One-shot subset-XOR: see [`SubsetXor`].
pub fn solve(inputs: &[BigUint], target: &BigUint) -> Option<Selector> {
    SubsetXor::new(inputs).solve(target)
}
