//! Polynomial multiplication over GF(2) in the reflected CRC bit order.
//!
//! Bit 31 of a word holds the x^0 coefficient and bit 0 holds x^31. Moduli
//! carry an implicit x^32 term that is never stored.

/// x^0, the multiplicative identity.
pub const X_POW_0: u32 = 0x8000_0000;

/// x^1.
pub const X_POW_1: u32 = 0x4000_0000;

/// Computes `p(x) * q(x) mod m(x)`.
pub fn multiply(p: u32, q: u32, m: u32) -> u32 {
    let mut product = 0u32;
    let mut px = p;
    let mut term = X_POW_0;

    while term != 0 {
        if q & term != 0 {
            product ^= px;
        }

        // bit 0 is x^31, so multiplying by x carries into the implicit x^32 of `m`
        let carry = px & 1 != 0;
        px >>= 1;
        if carry {
            px ^= m;
        }

        term >>= 1;
    }

    product
}
