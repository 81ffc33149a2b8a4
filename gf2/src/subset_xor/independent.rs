use num_bigint::BigUint;

use crate::matrix::BitMatrix;

use super::{bit_width, Selector};

/// Greedily keeps each input that raises the rank of the inputs kept so far.
///
/// The result is order dependent: earlier inputs win whenever several
/// maximal independent subsets exist. Once the basis holds `width` rows no
/// further input can be independent, so the rest are marked unselected.
pub fn independent_subset(inputs: &[BigUint]) -> Selector {
    let width = bit_width(inputs);
    let mut basis = BitMatrix::new(0, width);
    let mut flags = Vec::with_capacity(inputs.len());

    for input in inputs {
        if basis.nrows() >= width {
            break;
        }

        let before = basis.rank();
        basis.push_row(input.clone());
        basis.eliminate(None);

        if basis.rank() > before {
            flags.push(true);
        } else {
            // Dependent rows reduce to zero and sit after every pivot row.
            basis.truncate_last();
            flags.push(false);
        }
    }

    flags.resize(inputs.len(), false);
    Selector::from(flags)
}
