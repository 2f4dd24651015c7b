use super::{
    error::CrcError,
    gf2::{multiply, X_POW_0, X_POW_1},
};

/// Computes `x^(length_bytes * 8) mod m`.
///
/// A zero length yields `0` rather than the identity, which makes composing
/// with an empty right-hand block return that block's CRC unchanged.
pub fn get_monomial(length_bytes: u64, m: u32) -> u32 {
    if length_bytes == 0 {
        return 0;
    }

    // x^degree == PRODUCT(x^(2^i)) over the set bits of degree
    let mut degree = u128::from(length_bytes) * 8;
    let mut product = X_POW_0;
    let mut multiplier = X_POW_1;

    while degree > 0 {
        if degree & 1 != 0 {
            product = multiply(product, multiplier, m);
        }
        multiplier = multiply(multiplier, multiplier, m);
        degree >>= 1;
    }

    product
}

/// Like [`get_monomial`], but for signed lengths coming from untrusted input.
pub fn try_get_monomial(length_bytes: i64, m: u32) -> Result<u32, CrcError> {
    let length = u64::try_from(length_bytes).map_err(|_| CrcError::NegativeLength(length_bytes))?;
    Ok(get_monomial(length, m))
}
