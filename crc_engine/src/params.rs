//! CRC algorithm parameters.
//!
//! Naming follows the RevEng CRC catalogue: `poly` omits the implicit top
//! bit, `refin` reflects every input byte, `refout` reflects the register
//! after `xorout` is applied.

use std::fmt;

use log::debug;

use crate::engine::compute;
use crate::error::CrcError;
use crate::CHECK_INPUT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
    pub name: &'static str,
    /// Register width in bits, 1..=128.
    pub width: u8,
    pub poly: u128,
    pub init: u128,
    pub refin: bool,
    pub refout: bool,
    pub xorout: u128,
    /// CRC of `"123456789"`.
    pub check: u128,
}

impl CrcParams {
    /// Validates a custom parameter set and fills in its `check` value.
    pub fn new(
        name: &'static str,
        width: u8,
        poly: u128,
        init: u128,
        refin: bool,
        refout: bool,
        xorout: u128,
    ) -> Result<Self, CrcError> {
        if !(1..=128).contains(&width) {
            return Err(CrcError::InvalidWidth(width));
        }
        let mask = width_mask(width);
        for (field, value) in [("poly", poly), ("init", init), ("xorout", xorout)] {
            if value & !mask != 0 {
                return Err(CrcError::ValueTooWide { field, value, width });
            }
        }

        let mut params = Self {
            name,
            width,
            poly,
            init,
            refin,
            refout,
            xorout,
            check: 0,
        };
        params.check = compute(CHECK_INPUT, &params);
        debug!("custom CRC {}: width {}, check 0x{:X}", name, width, params.check);
        Ok(params)
    }

    /// All-ones value of `width` bits.
    pub fn mask(&self) -> u128 {
        width_mask(self.width)
    }

    /// Recomputes the check value, for catalog self-tests.
    pub fn verify_check(&self) -> bool {
        compute(CHECK_INPUT, self) == self.check
    }

    /// Digits needed to print a checksum of this width in hex.
    pub fn hex_digits(&self) -> usize {
        (self.width as usize).div_ceil(4)
    }
}

impl fmt::Display for CrcParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.hex_digits();
        write!(
            f,
            "width={} poly=0x{:0d$x} init=0x{:0d$x} refin={} refout={} xorout=0x{:0d$x} check=0x{:0d$x} name=\"{}\"",
            self.width,
            self.poly,
            self.init,
            self.refin,
            self.refout,
            self.xorout,
            self.check,
            self.name,
            d = digits
        )
    }
}

pub(crate) fn width_mask(width: u8) -> u128 {
    if width >= 128 {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}
