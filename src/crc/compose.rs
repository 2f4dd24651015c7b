use super::{
    error::CrcError,
    gf2::multiply,
    monomial::{get_monomial, try_get_monomial},
};

/// Combines `crc_a` with `crc_b` given a precomputed `x^(len(B) * 8) mod m`.
pub fn compose_with_monomial(crc_a: u32, crc_b: u32, monomial: u32, m: u32) -> u32 {
    multiply(crc_a, monomial, m) ^ crc_b
}

/// Returns the CRC of `A || B` from `crc(A)`, `crc(B)` and the length of `B` in bytes.
pub fn compose(crc_a: u32, crc_b: u32, length_b: u64, m: u32) -> u32 {
    compose_with_monomial(crc_a, crc_b, get_monomial(length_b, m), m)
}

/// Like [`compose`], but for signed lengths coming from untrusted input.
pub fn try_compose(crc_a: u32, crc_b: u32, length_b: i64, m: u32) -> Result<u32, CrcError> {
    let monomial = try_get_monomial(length_b, m)?;
    Ok(compose_with_monomial(crc_a, crc_b, monomial, m))
}
