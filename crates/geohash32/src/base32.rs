//! The geohash base-32 alphabet.
//!
//! Every symbol carries five interleaved subdivision bits, most significant
//! bit first. The alphabet omits `a`, `i`, `l` and `o`.

use crate::error::{Error, Result};

/// Geohash symbols in index order.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits carried by one symbol.
pub const BITS_PER_SYMBOL: u32 = 5;

/// Reverse lookup from ASCII byte to symbol index. `0xff` marks a byte that is
/// not part of the alphabet. Upper-case letters map to the same index as their
/// lower-case forms.
const DECODE_TABLE: [u8; 128] = build_decode_table();

/// Build [`DECODE_TABLE`] at compile time.
const fn build_decode_table() -> [u8; 128] {
    let mut table = [0xff_u8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i];
        table[c as usize] = i as u8;
        table[c.to_ascii_uppercase() as usize] = i as u8;
        i += 1;
    }
    table
}

/// Symbol for a 5-bit value. Only the low five bits of `idx` are used.
#[inline]
pub fn encode_symbol(idx: u8) -> char {
    ALPHABET[(idx & 0x1f) as usize] as char
}

/// Index of `c` in the alphabet, or `None` if it is not a geohash symbol.
#[inline]
pub fn symbol_index(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        0xff => None,
        idx => Some(idx),
    }
}

/// Decode the symbol at `position` to its 5-bit value.
pub fn decode_symbol(c: char, position: usize) -> Result<u8> {
    symbol_index(c).ok_or(Error::InvalidCharacter {
        character: c,
        position,
    })
}

/// Decode every symbol of `hash`, rejecting empty input.
pub fn decode_all(hash: &str) -> Result<Vec<u8>> {
    if hash.is_empty() {
        return Err(Error::EmptyInput);
    }
    hash.chars()
        .enumerate()
        .map(|(position, c)| decode_symbol(c, position))
        .collect()
}
