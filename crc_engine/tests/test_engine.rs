use crc_engine::catalog::{self, CATALOG};
use crc_engine::{compute, compute_named, reflect, Checksum, CrcDigest, CrcError, CrcParams};
use quickcheck::{quickcheck, TestResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GO_ISO: &[(&[u8], u128)] = &[
    (b"", 0x0),
    (b"a", 0x3420000000000000),
    (b"ab", 0x36c4200000000000),
    (b"abc", 0x3776c42000000000),
    (b"abcdefghij", 0x7f5b6e21b002d367),
    (b"Discard medicine more than two years old.", 0x8ec0e7c835bf9cdf),
    (b"Nepal premier won't resign.", 0x5255866ad6ef28a6),
    (b"C is as portable as Stonehedge!!", 0xa698a34c9d9f1dca),
    (b"This is a test of the emergency broadcast system.", 0xe7fcf1006b503b61),
];

#[test]
fn test_go_iso_vectors() {
    let params = catalog::find("CRC-64/GO-ISO").unwrap();
    for &(data, expected) in GO_ISO {
        assert_eq!(compute(data, &params), expected, "{:?}", String::from_utf8_lossy(data));
    }
}

#[test]
fn test_crc32_known_values() {
    assert_eq!(compute_named(b"123456789", "CRC-32/ISO-HDLC").unwrap(), 0xCBF43926);
    assert_eq!(compute_named(b"hello", "CRC-32").unwrap(), 0x3610A686);
    assert_eq!(compute_named(b"", "CRC-32").unwrap(), 0);
}

#[test]
fn test_empty_input_is_init_through_finalisation() {
    assert_eq!(compute_named(b"", "CRC-16/IBM-3740").unwrap(), 0xFFFF);
    assert_eq!(compute_named(b"", "CRC-16/XMODEM").unwrap(), 0);
}

#[test]
fn test_compute_named_unknown() {
    assert_eq!(
        compute_named(b"123456789", "CRC-33/NOPE"),
        Err(CrcError::UnknownAlgorithm("CRC-33/NOPE".to_string()))
    );
}

#[test]
fn test_reflect() {
    assert_eq!(reflect(0b0001, 4), 0b1000);
    assert_eq!(reflect(0b1101, 4), 0b1011);
    assert_eq!(reflect(0xF0, 4), 0);
    assert_eq!(reflect(1, 1), 1);
    assert_eq!(reflect(1, 128), 1 << 127);
    assert_eq!(reflect(0x1B, 64), 0xD800000000000000);
}

#[test]
fn test_streaming_matches_one_shot() {
    let params = catalog::find("CRC-32/ISCSI").unwrap();
    let data = b"The quick brown fox jumps over the lazy dog";
    let mut digest = CrcDigest::new(params);
    for chunk in data.chunks(5) {
        digest.update(chunk);
    }
    assert_eq!(digest.finalize(), compute(data, &params));

    digest.reset();
    digest.update(b"123456789");
    assert_eq!(digest.finalize(), params.check);
}

#[test]
fn test_finalize_does_not_consume() {
    let params = catalog::find("CRC-16/MODBUS").unwrap();
    let mut digest = CrcDigest::new(params);
    digest.update(b"1234");
    let _ = digest.finalize();
    digest.update(b"56789");
    assert_eq!(digest.finalize(), params.check);
}

#[test]
fn test_custom_reflected_crc64() {
    // reflected ECMA polynomial with a zero register, as used by some keygen challenges
    let params = CrcParams::new("CRC-64/ECMA-REFLECTED", 64, 0x42F0E1EBA9EA3693, 0, true, true, 0).unwrap();
    assert_eq!(params.check, 0x2B9C7EE4E2780C8A);
    assert!(params.verify_check());
}

#[test]
fn test_custom_refout_applies_xorout_first() {
    // xorout 0x0001 is not its own 16-bit reflection, so the order is visible
    let params = CrcParams::new("CRC-16/ASYMMETRIC", 16, 0x1021, 0, false, true, 0x0001).unwrap();
    assert_eq!(params.check, 0x438C);
    assert_eq!(compute(b"", &params), 0x8000);

    let unreflected = CrcParams::new("CRC-16/PLAIN", 16, 0x1021, 0, false, false, 0x0001).unwrap();
    assert_eq!(params.check, reflect(unreflected.check, 16));
}

#[test]
fn test_params_validation() {
    assert_eq!(CrcParams::new("zero", 0, 0, 0, false, false, 0), Err(CrcError::InvalidWidth(0)));
    assert_eq!(CrcParams::new("wide", 129, 0, 0, false, false, 0), Err(CrcError::InvalidWidth(129)));
    assert!(matches!(
        CrcParams::new("poly", 16, 0x1_1021, 0, false, false, 0),
        Err(CrcError::ValueTooWide { field: "poly", .. })
    ));
    assert!(matches!(
        CrcParams::new("xorout", 8, 0x07, 0, false, false, 0x100),
        Err(CrcError::ValueTooWide { field: "xorout", .. })
    ));
}

#[test]
fn test_params_rebuild_catalog_entry() {
    let xmodem = catalog::find("CRC-16/XMODEM").unwrap();
    let rebuilt = CrcParams::new("CRC-16/XMODEM", 16, 0x1021, 0, false, false, 0).unwrap();
    assert_eq!(rebuilt, xmodem);
    assert_eq!(rebuilt.mask(), 0xFFFF);
    assert_eq!(rebuilt.hex_digits(), 4);
}

#[test]
fn test_full_width_register() {
    let params = CrcParams::new("CRC-128/TEST", 128, 0x87, u128::MAX, false, false, 0).unwrap();
    assert_eq!(params.mask(), u128::MAX);
    assert_ne!(compute(b"a", &params), compute(b"b", &params));
}

#[test]
fn test_checksum_trait() {
    let params = catalog::find("CRC-32").unwrap();
    assert_eq!(params.checksum(b"123456789"), 0xCBF43926);

    let sum = |data: &[u8]| data.iter().fold(0u128, |acc, &b| acc ^ b as u128);
    assert_eq!(sum.checksum(&[1, 2, 4]), 7);
}

#[test]
fn test_display() {
    let params = catalog::find("CRC-16/ARC").unwrap();
    assert_eq!(
        params.to_string(),
        "width=16 poly=0x8005 init=0x0000 refin=true refout=true xorout=0x0000 check=0xbb3d name=\"CRC-16/ARC\""
    );
}

quickcheck! {
    // crc(a) ^ crc(b) ^ crc(c) == crc(a ^ b ^ c) for equal-length messages
    fn prop_affine_over_xor(index: usize, seed: u64, len: u8) -> TestResult {
        let params = &CATALOG[index % CATALOG.len()];
        let len = len as usize % 40;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut message = || (0..len).map(|_| rng.gen_range(0..=u8::MAX)).collect::<Vec<u8>>();
        let (a, b, c) = (message(), message(), message());
        let mixed: Vec<u8> = a.iter().zip(&b).zip(&c).map(|((x, y), z)| x ^ y ^ z).collect();

        TestResult::from_bool(
            compute(&a, params) ^ compute(&b, params) ^ compute(&c, params) == compute(&mixed, params),
        )
    }

    fn prop_result_fits_width(index: usize, data: Vec<u8>) -> bool {
        let params = &CATALOG[index % CATALOG.len()];
        compute(&data, params) <= params.mask()
    }

    fn prop_split_anywhere(data: Vec<u8>, split: usize) -> bool {
        let params = catalog::find("CRC-82/DARC").unwrap();
        let split = if data.is_empty() { 0 } else { split % data.len() };
        let mut digest = CrcDigest::new(params);
        digest.update(&data[..split]);
        digest.update(&data[split..]);
        digest.finalize() == compute(&data, &params)
    }
}
