//! Named parameter sets, after the RevEng CRC catalogue.
//!
//! Every entry's `check` is reproduced by [`compute`](crate::compute); the
//! catalog tests enforce this.

use log::trace;

use crate::error::CrcError;
use crate::params::CrcParams;

macro_rules! crc {
    ($name:expr, $width:expr, $poly:expr, $init:expr, $refin:expr, $refout:expr, $xorout:expr, $check:expr) => {
        CrcParams {
            name: $name,
            width: $width,
            poly: $poly,
            init: $init,
            refin: $refin,
            refout: $refout,
            xorout: $xorout,
            check: $check,
        }
    };
}

pub static CATALOG: &[CrcParams] = &[
    crc!("CRC-3/GSM", 3, 0x3, 0x0, false, false, 0x7, 0x4),
    crc!("CRC-3/ROHC", 3, 0x3, 0x7, true, true, 0x0, 0x6),
    crc!("CRC-4/G-704", 4, 0x3, 0x0, true, true, 0x0, 0x7),
    crc!("CRC-4/INTERLAKEN", 4, 0x3, 0xf, false, false, 0xf, 0xb),
    crc!("CRC-5/EPC-C1G2", 5, 0x09, 0x09, false, false, 0x00, 0x00),
    crc!("CRC-5/G-704", 5, 0x15, 0x00, true, true, 0x00, 0x07),
    crc!("CRC-5/USB", 5, 0x05, 0x1f, true, true, 0x1f, 0x19),
    crc!("CRC-6/CDMA2000-A", 6, 0x27, 0x3f, false, false, 0x00, 0x0d),
    crc!("CRC-6/CDMA2000-B", 6, 0x07, 0x3f, false, false, 0x00, 0x3b),
    crc!("CRC-6/DARC", 6, 0x19, 0x00, true, true, 0x00, 0x26),
    crc!("CRC-6/G-704", 6, 0x03, 0x00, true, true, 0x00, 0x06),
    crc!("CRC-6/GSM", 6, 0x2f, 0x00, false, false, 0x3f, 0x13),
    crc!("CRC-7/MMC", 7, 0x09, 0x00, false, false, 0x00, 0x75),
    crc!("CRC-7/ROHC", 7, 0x4f, 0x7f, true, true, 0x00, 0x53),
    crc!("CRC-7/UMTS", 7, 0x45, 0x00, false, false, 0x00, 0x61),
    crc!("CRC-8/AUTOSAR", 8, 0x2f, 0xff, false, false, 0xff, 0xdf),
    crc!("CRC-8/BLUETOOTH", 8, 0xa7, 0x00, true, true, 0x00, 0x26),
    crc!("CRC-8/CDMA2000", 8, 0x9b, 0xff, false, false, 0x00, 0xda),
    crc!("CRC-8/DARC", 8, 0x39, 0x00, true, true, 0x00, 0x15),
    crc!("CRC-8/DVB-S2", 8, 0xd5, 0x00, false, false, 0x00, 0xbc),
    crc!("CRC-8/GSM-A", 8, 0x1d, 0x00, false, false, 0x00, 0x37),
    crc!("CRC-8/GSM-B", 8, 0x49, 0x00, false, false, 0xff, 0x94),
    crc!("CRC-8/HITAG", 8, 0x1d, 0xff, false, false, 0x00, 0xb4),
    crc!("CRC-8/I-432-1", 8, 0x07, 0x00, false, false, 0x55, 0xa1),
    crc!("CRC-8/I-CODE", 8, 0x1d, 0xfd, false, false, 0x00, 0x7e),
    crc!("CRC-8/LTE", 8, 0x9b, 0x00, false, false, 0x00, 0xea),
    crc!("CRC-8/MAXIM-DOW", 8, 0x31, 0x00, true, true, 0x00, 0xa1),
    crc!("CRC-8/MIFARE-MAD", 8, 0x1d, 0xc7, false, false, 0x00, 0x99),
    crc!("CRC-8/NRSC-5", 8, 0x31, 0xff, false, false, 0x00, 0xf7),
    crc!("CRC-8/OPENSAFETY", 8, 0x2f, 0x00, false, false, 0x00, 0x3e),
    crc!("CRC-8/ROHC", 8, 0x07, 0xff, true, true, 0x00, 0xd0),
    crc!("CRC-8/SAE-J1850", 8, 0x1d, 0xff, false, false, 0xff, 0x4b),
    crc!("CRC-8/SMBUS", 8, 0x07, 0x00, false, false, 0x00, 0xf4),
    crc!("CRC-8/TECH-3250", 8, 0x1d, 0xff, true, true, 0x00, 0x97),
    crc!("CRC-8/WCDMA", 8, 0x9b, 0x00, true, true, 0x00, 0x25),
    crc!("CRC-10/ATM", 10, 0x233, 0x000, false, false, 0x000, 0x199),
    crc!("CRC-10/CDMA2000", 10, 0x3d9, 0x3ff, false, false, 0x000, 0x233),
    crc!("CRC-10/GSM", 10, 0x175, 0x000, false, false, 0x3ff, 0x12a),
    crc!("CRC-11/FLEXRAY", 11, 0x385, 0x01a, false, false, 0x000, 0x5a3),
    crc!("CRC-11/UMTS", 11, 0x307, 0x000, false, false, 0x000, 0x061),
    crc!("CRC-12/CDMA2000", 12, 0xf13, 0xfff, false, false, 0x000, 0xd4d),
    crc!("CRC-12/DECT", 12, 0x80f, 0x000, false, false, 0x000, 0xf5b),
    crc!("CRC-12/GSM", 12, 0xd31, 0x000, false, false, 0xfff, 0xb34),
    crc!("CRC-12/UMTS", 12, 0x80f, 0x000, false, true, 0x000, 0xdaf),
    crc!("CRC-13/BBC", 13, 0x1cf5, 0x0000, false, false, 0x0000, 0x04fa),
    crc!("CRC-14/DARC", 14, 0x0805, 0x0000, true, true, 0x0000, 0x082d),
    crc!("CRC-14/GSM", 14, 0x202d, 0x0000, false, false, 0x3fff, 0x30ae),
    crc!("CRC-15/CAN", 15, 0x4599, 0x0000, false, false, 0x0000, 0x059e),
    crc!("CRC-15/MPT1327", 15, 0x6815, 0x0000, false, false, 0x0001, 0x2566),
    crc!("CRC-16/ARC", 16, 0x8005, 0x0000, true, true, 0x0000, 0xbb3d),
    crc!("CRC-16/CDMA2000", 16, 0xc867, 0xffff, false, false, 0x0000, 0x4c06),
    crc!("CRC-16/CMS", 16, 0x8005, 0xffff, false, false, 0x0000, 0xaee7),
    crc!("CRC-16/DDS-110", 16, 0x8005, 0x800d, false, false, 0x0000, 0x9ecf),
    crc!("CRC-16/DECT-R", 16, 0x0589, 0x0000, false, false, 0x0001, 0x007e),
    crc!("CRC-16/DECT-X", 16, 0x0589, 0x0000, false, false, 0x0000, 0x007f),
    crc!("CRC-16/DNP", 16, 0x3d65, 0x0000, true, true, 0xffff, 0xea82),
    crc!("CRC-16/EN-13757", 16, 0x3d65, 0x0000, false, false, 0xffff, 0xc2b7),
    crc!("CRC-16/GENIBUS", 16, 0x1021, 0xffff, false, false, 0xffff, 0xd64e),
    crc!("CRC-16/GSM", 16, 0x1021, 0x0000, false, false, 0xffff, 0xce3c),
    crc!("CRC-16/IBM-3740", 16, 0x1021, 0xffff, false, false, 0x0000, 0x29b1),
    crc!("CRC-16/IBM-SDLC", 16, 0x1021, 0xffff, true, true, 0xffff, 0x906e),
    crc!("CRC-16/ISO-IEC-14443-3-A", 16, 0x1021, 0xc6c6, true, true, 0x0000, 0xbf05),
    crc!("CRC-16/KERMIT", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189),
    crc!("CRC-16/LJ1200", 16, 0x6f63, 0x0000, false, false, 0x0000, 0xbdf4),
    crc!("CRC-16/M17", 16, 0x5935, 0xffff, false, false, 0x0000, 0x772b),
    crc!("CRC-16/MAXIM-DOW", 16, 0x8005, 0x0000, true, true, 0xffff, 0x44c2),
    crc!("CRC-16/MCRF4XX", 16, 0x1021, 0xffff, true, true, 0x0000, 0x6f91),
    crc!("CRC-16/MODBUS", 16, 0x8005, 0xffff, true, true, 0x0000, 0x4b37),
    crc!("CRC-16/NRSC-5", 16, 0x080b, 0xffff, true, true, 0x0000, 0xa066),
    crc!("CRC-16/OPENSAFETY-A", 16, 0x5935, 0x0000, false, false, 0x0000, 0x5d38),
    crc!("CRC-16/OPENSAFETY-B", 16, 0x755b, 0x0000, false, false, 0x0000, 0x20fe),
    crc!("CRC-16/PROFIBUS", 16, 0x1dcf, 0xffff, false, false, 0xffff, 0xa819),
    crc!("CRC-16/RIELLO", 16, 0x1021, 0xb2aa, true, true, 0x0000, 0x63d0),
    crc!("CRC-16/SPI-FUJITSU", 16, 0x1021, 0x1d0f, false, false, 0x0000, 0xe5cc),
    crc!("CRC-16/T10-DIF", 16, 0x8bb7, 0x0000, false, false, 0x0000, 0xd0db),
    crc!("CRC-16/TELEDISK", 16, 0xa097, 0x0000, false, false, 0x0000, 0x0fb3),
    crc!("CRC-16/TMS37157", 16, 0x1021, 0x89ec, true, true, 0x0000, 0x26b1),
    crc!("CRC-16/UMTS", 16, 0x8005, 0x0000, false, false, 0x0000, 0xfee8),
    crc!("CRC-16/USB", 16, 0x8005, 0xffff, true, true, 0xffff, 0xb4c8),
    crc!("CRC-16/XMODEM", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31c3),
    crc!("CRC-17/CAN-FD", 17, 0x1685b, 0x00000, false, false, 0x00000, 0x04f03),
    crc!("CRC-21/CAN-FD", 21, 0x102899, 0x000000, false, false, 0x000000, 0x0ed841),
    crc!("CRC-24/BLE", 24, 0x00065b, 0x555555, true, true, 0x000000, 0xc25a56),
    crc!("CRC-24/FLEXRAY-A", 24, 0x5d6dcb, 0xfedcba, false, false, 0x000000, 0x7979bd),
    crc!("CRC-24/FLEXRAY-B", 24, 0x5d6dcb, 0xabcdef, false, false, 0x000000, 0x1f23b8),
    crc!("CRC-24/INTERLAKEN", 24, 0x328b63, 0xffffff, false, false, 0xffffff, 0xb4f3e6),
    crc!("CRC-24/LTE-A", 24, 0x864cfb, 0x000000, false, false, 0x000000, 0xcde703),
    crc!("CRC-24/LTE-B", 24, 0x800063, 0x000000, false, false, 0x000000, 0x23ef52),
    crc!("CRC-24/OPENPGP", 24, 0x864cfb, 0xb704ce, false, false, 0x000000, 0x21cf02),
    crc!("CRC-24/OS-9", 24, 0x800063, 0xffffff, false, false, 0xffffff, 0x200fa5),
    crc!("CRC-30/CDMA", 30, 0x2030b9c7, 0x3fffffff, false, false, 0x3fffffff, 0x04c34abf),
    crc!("CRC-31/PHILIPS", 31, 0x04c11db7, 0x7fffffff, false, false, 0x7fffffff, 0x0ce9e46c),
    crc!("CRC-32/AIXM", 32, 0x814141ab, 0x00000000, false, false, 0x00000000, 0x3010bf7f),
    crc!("CRC-32/AUTOSAR", 32, 0xf4acfb13, 0xffffffff, true, true, 0xffffffff, 0x1697d06a),
    crc!("CRC-32/BASE91-D", 32, 0xa833982b, 0xffffffff, true, true, 0xffffffff, 0x87315576),
    crc!("CRC-32/BZIP2", 32, 0x04c11db7, 0xffffffff, false, false, 0xffffffff, 0xfc891918),
    crc!("CRC-32/CD-ROM-EDC", 32, 0x8001801b, 0x00000000, true, true, 0x00000000, 0x6ec2edc4),
    crc!("CRC-32/CKSUM", 32, 0x04c11db7, 0x00000000, false, false, 0xffffffff, 0x765e7680),
    crc!("CRC-32/ISCSI", 32, 0x1edc6f41, 0xffffffff, true, true, 0xffffffff, 0xe3069283),
    crc!("CRC-32/ISO-HDLC", 32, 0x04c11db7, 0xffffffff, true, true, 0xffffffff, 0xcbf43926),
    crc!("CRC-32/JAMCRC", 32, 0x04c11db7, 0xffffffff, true, true, 0x00000000, 0x340bc6d9),
    crc!("CRC-32/MEF", 32, 0x741b8cd7, 0xffffffff, true, true, 0x00000000, 0xd2c22f51),
    crc!("CRC-32/MPEG-2", 32, 0x04c11db7, 0xffffffff, false, false, 0x00000000, 0x0376e6e7),
    crc!("CRC-32/XFER", 32, 0x000000af, 0x00000000, false, false, 0x00000000, 0xbd0be338),
    crc!("CRC-40/GSM", 40, 0x0004820009, 0x0000000000, false, false, 0xffffffffff, 0xd4164fc646),
    crc!("CRC-64/ECMA-182", 64, 0x42f0e1eba9ea3693, 0x0000000000000000, false, false, 0x0000000000000000, 0x6c40df5f0b497347),
    crc!("CRC-64/GO-ISO", 64, 0x000000000000001b, 0xffffffffffffffff, true, true, 0xffffffffffffffff, 0xb90956c775a41001),
    crc!("CRC-64/MS", 64, 0x259c84cba6426349, 0xffffffffffffffff, true, true, 0x0000000000000000, 0x75d4b74f024eceea),
    crc!("CRC-64/NVME", 64, 0xad93d23594c93659, 0xffffffffffffffff, true, true, 0xffffffffffffffff, 0xae8b14860a799888),
    crc!("CRC-64/REDIS", 64, 0xad93d23594c935a9, 0x0000000000000000, true, true, 0x0000000000000000, 0xe9c6d914c4b8d9ca),
    crc!("CRC-64/WE", 64, 0x42f0e1eba9ea3693, 0xffffffffffffffff, false, false, 0xffffffffffffffff, 0x62ec59e3f1a4f00a),
    crc!("CRC-64/XZ", 64, 0x42f0e1eba9ea3693, 0xffffffffffffffff, true, true, 0xffffffffffffffff, 0x995dc9bbdf1939fa),
    crc!("CRC-82/DARC", 82, 0x0308c0111011401440411, 0x000000000000000000000, true, true, 0x000000000000000000000, 0x09ea83f625023801fd612),
];

/// Common names mapped to their catalogue entry.
pub static ALIASES: &[(&str, &str)] = &[
    ("CRC-3", "CRC-3/GSM"),
    ("CRC-4/ITU", "CRC-4/G-704"),
    ("CRC-5/EPC", "CRC-5/EPC-C1G2"),
    ("CRC-5/ITU", "CRC-5/G-704"),
    ("CRC-6/ITU", "CRC-6/G-704"),
    ("CRC-7", "CRC-7/MMC"),
    ("CRC-8", "CRC-8/SMBUS"),
    ("CRC-8/AES", "CRC-8/TECH-3250"),
    ("CRC-8/EBU", "CRC-8/TECH-3250"),
    ("CRC-8/ITU", "CRC-8/I-432-1"),
    ("CRC-8/MAXIM", "CRC-8/MAXIM-DOW"),
    ("DOW-CRC", "CRC-8/MAXIM-DOW"),
    ("CRC-10", "CRC-10/ATM"),
    ("CRC-10/I-610", "CRC-10/ATM"),
    ("CRC-11", "CRC-11/FLEXRAY"),
    ("CRC-12/3GPP", "CRC-12/UMTS"),
    ("CRC-15", "CRC-15/CAN"),
    ("ARC", "CRC-16/ARC"),
    ("CRC-16", "CRC-16/ARC"),
    ("CRC-16/LHA", "CRC-16/ARC"),
    ("CRC-IBM", "CRC-16/ARC"),
    ("CRC-16/BUYPASS", "CRC-16/UMTS"),
    ("CRC-16/VERIFONE", "CRC-16/UMTS"),
    ("CRC-16/AUTOSAR", "CRC-16/IBM-3740"),
    ("CRC-16/CCITT-FALSE", "CRC-16/IBM-3740"),
    ("CRC-16/AUG-CCITT", "CRC-16/SPI-FUJITSU"),
    ("CRC-16/DARC", "CRC-16/GENIBUS"),
    ("CRC-16/EPC", "CRC-16/GENIBUS"),
    ("CRC-16/EPC-C1G2", "CRC-16/GENIBUS"),
    ("CRC-16/I-CODE", "CRC-16/GENIBUS"),
    ("CRC-16/IEC-61158-2", "CRC-16/PROFIBUS"),
    ("CRC-16/ISO-HDLC", "CRC-16/IBM-SDLC"),
    ("CRC-16/ISO-IEC-14443-3-B", "CRC-16/IBM-SDLC"),
    ("CRC-16/X-25", "CRC-16/IBM-SDLC"),
    ("CRC-B", "CRC-16/IBM-SDLC"),
    ("X-25", "CRC-16/IBM-SDLC"),
    ("CRC-A", "CRC-16/ISO-IEC-14443-3-A"),
    ("CRC-16/CCITT", "CRC-16/KERMIT"),
    ("CRC-16/CCITT-TRUE", "CRC-16/KERMIT"),
    ("CRC-16/V-41-LSB", "CRC-16/KERMIT"),
    ("CRC-CCITT", "CRC-16/KERMIT"),
    ("KERMIT", "CRC-16/KERMIT"),
    ("CRC-16/MAXIM", "CRC-16/MAXIM-DOW"),
    ("MODBUS", "CRC-16/MODBUS"),
    ("CRC-16/ACORN", "CRC-16/XMODEM"),
    ("CRC-16/LTE", "CRC-16/XMODEM"),
    ("CRC-16/V-41-MSB", "CRC-16/XMODEM"),
    ("CRC-HQX", "CRC-16/XMODEM"),
    ("XMODEM", "CRC-16/XMODEM"),
    ("ZMODEM", "CRC-16/XMODEM"),
    ("CRC-24", "CRC-24/OPENPGP"),
    ("CRC-32", "CRC-32/ISO-HDLC"),
    ("CRC-32/ADCCP", "CRC-32/ISO-HDLC"),
    ("CRC-32/V-42", "CRC-32/ISO-HDLC"),
    ("CRC-32/XZ", "CRC-32/ISO-HDLC"),
    ("PKZIP", "CRC-32/ISO-HDLC"),
    ("B-CRC-32", "CRC-32/BZIP2"),
    ("CRC-32/AAL5", "CRC-32/BZIP2"),
    ("CRC-32/DECT-B", "CRC-32/BZIP2"),
    ("CKSUM", "CRC-32/CKSUM"),
    ("CRC-32/POSIX", "CRC-32/CKSUM"),
    ("CRC-32C", "CRC-32/ISCSI"),
    ("CRC-32/CASTAGNOLI", "CRC-32/ISCSI"),
    ("CRC-32/INTERLAKEN", "CRC-32/ISCSI"),
    ("CRC-32D", "CRC-32/BASE91-D"),
    ("CRC-32Q", "CRC-32/AIXM"),
    ("JAMCRC", "CRC-32/JAMCRC"),
    ("XFER", "CRC-32/XFER"),
    ("CRC-64", "CRC-64/ECMA-182"),
    ("CRC-64/GO-ECMA", "CRC-64/XZ"),
    ("CRC-82", "CRC-82/DARC"),
];

/// Looks up a catalogue name or alias, ignoring ASCII case.
pub fn find(name: &str) -> Result<CrcParams, CrcError> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map_or(name, |&(_, canonical)| canonical);

    CATALOG
        .iter()
        .find(|params| params.name.eq_ignore_ascii_case(canonical))
        .copied()
        .ok_or_else(|| {
            trace!("no catalogue entry for {:?}", name);
            CrcError::UnknownAlgorithm(name.to_string())
        })
}

/// Canonical names in catalogue order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|params| params.name)
}

/// Entries of the given width.
pub fn by_width(width: u8) -> impl Iterator<Item = &'static CrcParams> {
    CATALOG.iter().filter(move |params| params.width == width)
}
