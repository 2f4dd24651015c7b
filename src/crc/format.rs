//! Big-endian serialization and display of CRC values.

use super::{error::CrcError, CRC_SIZE_BYTES};

pub fn int_to_bytes(value: u32) -> [u8; CRC_SIZE_BYTES] {
    value.to_be_bytes()
}

pub fn write_int(buf: &mut [u8], offset: usize, value: u32) -> Result<(), CrcError> {
    let len = buf.len();
    let slot = offset
        .checked_add(CRC_SIZE_BYTES)
        .and_then(|end| buf.get_mut(offset..end))
        .ok_or(CrcError::OutOfBounds { offset, len })?;
    slot.copy_from_slice(&int_to_bytes(value));
    Ok(())
}

pub fn read_int(buf: &[u8], offset: usize) -> Result<u32, CrcError> {
    let bytes: [u8; CRC_SIZE_BYTES] = offset
        .checked_add(CRC_SIZE_BYTES)
        .and_then(|end| buf.get(offset..end))
        .and_then(|slice| slice.try_into().ok())
        .ok_or(CrcError::OutOfBounds {
            offset,
            len: buf.len(),
        })?;
    Ok(u32::from_be_bytes(bytes))
}

/// Renders exactly one serialized CRC as `0x%08x`.
pub fn to_single_crc_string(bytes: &[u8]) -> Result<String, CrcError> {
    if bytes.len() != CRC_SIZE_BYTES {
        return Err(CrcError::UnalignedCrcBuffer(bytes.len()));
    }
    Ok(format!("0x{}", hex::encode(bytes)))
}

/// Renders a buffer of serialized CRCs as `[0x........, 0x........]`.
pub fn to_multi_crc_string(bytes: &[u8]) -> Result<String, CrcError> {
    if bytes.len() % CRC_SIZE_BYTES != 0 {
        return Err(CrcError::UnalignedCrcBuffer(bytes.len()));
    }

    let crcs: Vec<String> = bytes
        .chunks_exact(CRC_SIZE_BYTES)
        .map(|chunk| format!("0x{}", hex::encode(chunk)))
        .collect();

    Ok(format!("[{}]", crcs.join(", ")))
}

/// Parses a CRC given as `0x`-prefixed hex or as a decimal number.
pub fn parse_crc(s: &str) -> Result<u32, CrcError> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => trimmed.parse::<u32>(),
    };

    parsed.map_err(|_| CrcError::InvalidCrc(trimmed.to_string()))
}
