//! Prints twelve-character ASCII strings sharing a CRC-64 with "lorem ipsum ".
//!
//! The checksum is a hand-rolled right-shifting CRC-64 that is not in the
//! catalogue. Run with `RUST_LOG=debug` to watch the solver.

use std::collections::HashSet;

use cracker::solve_bits;
use rand::seq::SliceRandom;

const POLY: u64 = 0x42f0e1eba9ea3693;

fn crc64(data: &[u8]) -> u128 {
    let mut crc = u64::MAX;
    for &b in data {
        crc ^= b as u64;
        for _ in 0..8 {
            crc = if crc & 1 == 1 { (crc >> 1) ^ POLY } else { crc >> 1 };
        }
    }
    crc as u128
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let target = crc64(b"lorem ipsum ");
    println!("target: 0x{:016x}", target);

    // bytes start as 0x40 and keep their top two bits, so every solution is ASCII
    let mut unknowns: Vec<usize> = (0..8 * 12).filter(|p| p % 8 > 1).collect();
    let mut rng = rand::thread_rng();
    let mut seen = HashSet::new();

    while seen.len() < 8 {
        unknowns.shuffle(&mut rng);
        let Some(recovered) = solve_bits(&[0x40; 12], &unknowns, target, &crc64)? else {
            continue;
        };
        assert_eq!(crc64(&recovered.message), target);
        if seen.insert(recovered.message.clone()) {
            println!("{}", String::from_utf8_lossy(&recovered.message));
        }
    }
    Ok(())
}
