use crate::catalog;
use crate::error::CrcError;
use crate::params::{width_mask, CrcParams};

/// Reverses the low `width` bits of `value`; higher bits are dropped.
pub fn reflect(value: u128, width: u8) -> u128 {
    if width == 0 {
        return 0;
    }
    let width = width.min(128);
    (value & width_mask(width)).reverse_bits() >> (128 - width as u32)
}

/// Streaming CRC state for one parameter set.
#[derive(Clone, Debug)]
pub struct CrcDigest {
    params: CrcParams,
    register: u128,
}

impl CrcDigest {
    pub fn new(params: CrcParams) -> Self {
        Self {
            register: params.init & params.mask(),
            params,
        }
    }

    pub fn params(&self) -> &CrcParams {
        &self.params
    }

    /// Shifts `data` through the register one bit at a time, MSB first
    /// (after reflecting the byte when `refin` is set).
    pub fn update(&mut self, data: &[u8]) {
        let mask = self.params.mask();
        let top = (self.params.width.clamp(1, 128) - 1) as u32;
        let poly = self.params.poly;
        let mut register = self.register;

        for &byte in data {
            let byte = if self.params.refin { byte.reverse_bits() } else { byte };
            for i in (0..8).rev() {
                let feedback = ((register >> top) as u8 ^ (byte >> i)) & 1;
                register = (register << 1) & mask;
                if feedback == 1 {
                    register ^= poly;
                }
            }
        }
        self.register = register;
    }

    /// Final checksum: XORed with `xorout`, then reflected if `refout`.
    /// The digest can keep absorbing data afterwards.
    pub fn finalize(&self) -> u128 {
        let register = self.register ^ self.params.xorout;
        if self.params.refout {
            reflect(register, self.params.width)
        } else {
            register
        }
    }

    pub fn reset(&mut self) {
        self.register = self.params.init & self.params.mask();
    }
}

/// One-shot CRC of `data`.
pub fn compute(data: &[u8], params: &CrcParams) -> u128 {
    let mut digest = CrcDigest::new(*params);
    digest.update(data);
    digest.finalize()
}

/// CRC of `data` under a catalogued algorithm name.
pub fn compute_named(data: &[u8], name: &str) -> Result<u128, CrcError> {
    let params = catalog::find(name)?;
    Ok(compute(data, &params))
}
