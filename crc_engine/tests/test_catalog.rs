use std::collections::HashSet;

use crc_engine::catalog::{self, ALIASES, CATALOG};
use crc_engine::{compute, CrcError, CHECK_INPUT};

#[test]
fn test_every_entry_reproduces_check() {
    for params in CATALOG {
        assert_eq!(
            compute(CHECK_INPUT, params),
            params.check,
            "{} computes the wrong check value",
            params.name
        );
    }
}

#[test]
fn test_entries_are_well_formed() {
    let mut seen = HashSet::new();
    for params in CATALOG {
        assert!(seen.insert(params.name), "duplicate entry {}", params.name);
        assert!((1..=128).contains(&params.width));
        for value in [params.poly, params.init, params.xorout, params.check] {
            assert!(value <= params.mask(), "{} has a value wider than its register", params.name);
        }
        // odd polynomials only
        assert_eq!(params.poly & 1, 1, "{}", params.name);
    }
}

#[test]
fn test_catalog_width_range() {
    assert_eq!(CATALOG.iter().map(|p| p.width).min(), Some(3));
    assert_eq!(CATALOG.iter().map(|p| p.width).max(), Some(82));
    assert!(catalog::by_width(16).count() > 20);
    assert_eq!(catalog::by_width(82).count(), 1);
}

#[test]
fn test_aliases_resolve() {
    for &(alias, canonical) in ALIASES {
        let params = catalog::find(alias).unwrap_or_else(|_| panic!("alias {} is dangling", alias));
        assert_eq!(params.name, canonical);
    }
    assert_eq!(catalog::find("CRC-32C").unwrap().check, 0xE3069283);
    assert_eq!(catalog::find("CRC-HQX").unwrap().name, "CRC-16/XMODEM");
    assert_eq!(catalog::find("X-25").unwrap().check, 0x906E);
    assert_eq!(catalog::find("MODBUS").unwrap().check, 0x4B37);
    assert_eq!(catalog::find("CRC-16/CCITT-FALSE").unwrap().check, 0x29B1);
}

#[test]
fn test_aliases_do_not_shadow_entries() {
    for &(alias, _) in ALIASES {
        assert!(catalog::names().all(|name| !name.eq_ignore_ascii_case(alias)), "{}", alias);
    }
}

#[test]
fn test_lookup_ignores_case() {
    assert_eq!(catalog::find("crc-32/iso-hdlc").unwrap().check, 0xCBF43926);
    assert_eq!(catalog::find("Crc-64/Go-Iso").unwrap().check, 0xB90956C775A41001);
    assert_eq!(catalog::find("crc-32c").unwrap().name, "CRC-32/ISCSI");
}

#[test]
fn test_lookup_unknown() {
    assert!(matches!(catalog::find(""), Err(CrcError::UnknownAlgorithm(_))));
    assert!(matches!(catalog::find("CRC-32/ISO"), Err(CrcError::UnknownAlgorithm(_))));
}

#[test]
fn test_names_in_catalog_order() {
    let names: Vec<&str> = catalog::names().collect();
    assert_eq!(names.len(), CATALOG.len());
    assert_eq!(names.first(), Some(&"CRC-3/GSM"));
    assert_eq!(names.last(), Some(&"CRC-82/DARC"));
}
