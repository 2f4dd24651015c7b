use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrcError {
    #[error("Block length must not be negative, got {0}")]
    NegativeLength(i64),

    #[error("CRC buffer of {0} bytes is not a multiple of the CRC size")]
    UnalignedCrcBuffer(usize),

    #[error("Offset {offset} is out of bounds for a CRC buffer of {len} bytes")]
    OutOfBounds { offset: usize, len: usize },

    #[error(
        "Position in stripe ({position}) after advancing by bytes per CRC ({bytes_per_crc}) exceeds stripe length ({stripe_length})"
    )]
    StripeOverrun {
        position: u64,
        bytes_per_crc: u64,
        stripe_length: u64,
    },

    #[error("Unknown CRC polynomial '{0}'")]
    InvalidPolynomial(String),

    #[error("Invalid CRC value '{0}'")]
    InvalidCrc(String),

    #[error("Invalid block '{0}', expected <crc>:<length>")]
    InvalidBlock(String),
}
