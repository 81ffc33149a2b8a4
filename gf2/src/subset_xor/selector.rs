use num_bigint::BigUint;
use num_traits::Zero;

/// One membership flag per input vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector(Vec<bool>);

impl Selector {
    pub fn new(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
    }

    /// Flags as `0`/`1`.
    pub fn to_bits(&self) -> Vec<u8> {
        self.0.iter().map(|&flag| u8::from(flag)).collect()
    }

    /// XOR of the selected `inputs`.
    pub fn combine(&self, inputs: &[BigUint]) -> BigUint {
        let mut acc = BigUint::zero();
        for (input, _) in inputs.iter().zip(&self.0).filter(|(_, flag)| **flag) {
            acc ^= input;
        }
        acc
    }
}

impl From<Vec<bool>> for Selector {
    fn from(flags: Vec<bool>) -> Self {
        Self(flags)
    }
}

impl FromIterator<bool> for Selector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
