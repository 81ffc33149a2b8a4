//! Argument parsers for the command line.

use std::ops::Range;

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex number {0:?}")]
    Number(String),

    #[error("invalid bit range {0:?}, expected N, A..B or A..=B")]
    Range(String),

    #[error("invalid hex data: {0}")]
    Hex(#[from] hex::FromHexError),
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

/// `N`, `A..B` or `A..=B`, in decimal.
pub fn parse_span(s: &str) -> Result<Range<usize>, CliError> {
    let bad = || CliError::Range(s.to_string());
    let number = |n: &str| n.trim().parse::<usize>().map_err(|_| bad());

    let span = if let Some((start, end)) = s.split_once("..=") {
        let end = number(end)?.checked_add(1).ok_or_else(bad)?;
        number(start)?..end
    } else if let Some((start, end)) = s.split_once("..") {
        number(start)?..number(end)?
    } else {
        let bit = number(s)?;
        bit..bit.checked_add(1).ok_or_else(bad)?
    };

    if span.start > span.end {
        return Err(bad());
    }
    Ok(span)
}

pub fn parse_u128(s: &str) -> Result<u128, CliError> {
    u128::from_str_radix(strip_hex_prefix(s.trim()), 16).map_err(|_| CliError::Number(s.to_string()))
}

pub fn parse_biguint(s: &str) -> Result<BigUint, CliError> {
    BigUint::parse_bytes(strip_hex_prefix(s.trim()).as_bytes(), 16).ok_or_else(|| CliError::Number(s.to_string()))
}

/// Message bytes from hex (whitespace ignored) or from raw text.
pub fn message_bytes(data: &str, is_hex: bool) -> Result<Vec<u8>, CliError> {
    if is_hex {
        let digits: String = data.split_whitespace().collect();
        Ok(hex::decode(strip_hex_prefix(&digits))?)
    } else {
        Ok(data.as_bytes().to_vec())
    }
}
