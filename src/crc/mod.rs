pub mod compose;
pub mod composer;
pub mod error;
pub mod format;
pub mod gf2;
pub mod monomial;
pub mod polynomial;

pub use compose::{compose, compose_with_monomial, try_compose};
pub use composer::CrcComposer;
pub use error::CrcError;
pub use gf2::multiply;
pub use monomial::{get_monomial, try_get_monomial};
pub use polynomial::CrcPolynomial;

/// CRC-32 (IEEE 802.3, gzip, zlib), reflected.
pub const GZIP_POLYNOMIAL: u32 = 0xEDB8_8320;

/// CRC-32C (iSCSI, Castagnoli), reflected.
pub const CASTAGNOLI_POLYNOMIAL: u32 = 0x82F6_3B78;

/// Size of a serialized CRC in bytes.
pub const CRC_SIZE_BYTES: usize = 4;
