use tracing::{debug, trace};

use super::{
    compose::{compose, compose_with_monomial},
    error::CrcError,
    format::{int_to_bytes, read_int},
    monomial::get_monomial,
    polynomial::CrcPolynomial,
    CRC_SIZE_BYTES,
};

/// Folds a sequence of per-block CRCs into composite CRCs, one per stripe.
///
/// Blocks are usually the same size, so the monomial for `bytes_per_crc_hint`
/// is computed once up front and reused for every matching block.
#[derive(Debug, Clone)]
pub struct CrcComposer {
    polynomial: u32,
    bytes_per_crc_hint: u64,
    precomputed_monomial: u32,
    stripe_length: u64,
    current_crc: u32,
    position_in_stripe: u64,
    digest: Vec<u8>,
}

impl CrcComposer {
    /// A composer producing a single CRC over every block it is given.
    pub fn new(polynomial: CrcPolynomial, bytes_per_crc_hint: u64) -> Self {
        Self::striped(polynomial, bytes_per_crc_hint, u64::MAX)
    }

    /// A composer emitting one CRC for every `stripe_length` bytes of input.
    pub fn striped(polynomial: CrcPolynomial, bytes_per_crc_hint: u64, stripe_length: u64) -> Self {
        let modulus = polynomial.modulus();
        Self {
            polynomial: modulus,
            bytes_per_crc_hint,
            precomputed_monomial: get_monomial(bytes_per_crc_hint, modulus),
            stripe_length,
            current_crc: 0,
            position_in_stripe: 0,
            digest: Vec::new(),
        }
    }

    pub fn polynomial(&self) -> CrcPolynomial {
        CrcPolynomial::from_modulus(self.polynomial)
    }

    /// Appends the CRC of the next `bytes_per_crc` bytes.
    ///
    /// Empty blocks contribute nothing and are skipped.
    pub fn update(&mut self, crc: u32, bytes_per_crc: u64) -> Result<(), CrcError> {
        if bytes_per_crc == 0 {
            trace!("skipping empty block with crc 0x{:08x}", crc);
            return Ok(());
        }

        let position = self
            .position_in_stripe
            .checked_add(bytes_per_crc)
            .filter(|position| *position <= self.stripe_length)
            .ok_or(CrcError::StripeOverrun {
                position: self.position_in_stripe.saturating_add(bytes_per_crc),
                bytes_per_crc,
                stripe_length: self.stripe_length,
            })?;

        self.current_crc = if bytes_per_crc == self.bytes_per_crc_hint {
            compose_with_monomial(
                self.current_crc,
                crc,
                self.precomputed_monomial,
                self.polynomial,
            )
        } else {
            trace!(
                "block of {} bytes differs from hint of {}, computing monomial",
                bytes_per_crc,
                self.bytes_per_crc_hint
            );
            compose(self.current_crc, crc, bytes_per_crc, self.polynomial)
        };

        self.position_in_stripe = position;
        if position == self.stripe_length {
            debug!("completed stripe with crc 0x{:08x}", self.current_crc);
            self.flush();
        }

        Ok(())
    }

    /// Appends a buffer of big-endian CRCs, each covering `bytes_per_crc` bytes.
    pub fn update_from_bytes(&mut self, crcs: &[u8], bytes_per_crc: u64) -> Result<(), CrcError> {
        if crcs.len() % CRC_SIZE_BYTES != 0 {
            return Err(CrcError::UnalignedCrcBuffer(crcs.len()));
        }

        for offset in (0..crcs.len()).step_by(CRC_SIZE_BYTES) {
            self.update(read_int(crcs, offset)?, bytes_per_crc)?;
        }

        Ok(())
    }

    /// Returns every CRC emitted so far, including a trailing partial stripe,
    /// and resets the composer.
    pub fn digest(&mut self) -> Vec<u8> {
        if self.position_in_stripe > 0 {
            self.flush();
        }
        std::mem::take(&mut self.digest)
    }

    fn flush(&mut self) {
        self.digest.extend_from_slice(&int_to_bytes(self.current_crc));
        self.current_crc = 0;
        self.position_in_stripe = 0;
    }
}
